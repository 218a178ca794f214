//! Keyword synonym tables.
//!
//! Every table lists the spellings a player may type in any supported
//! language. Entries are compared against lower-cased query tokens after
//! passing through `Localizer::normalize_keyword`.

use crate::cards::{CardType, EffectGroup, Timming};

pub const COLORS: &[(&str, &[&str])] = &[
    ("colorless", &["colorless", "无", "无色", "無", "incolore", "무", "무색"]),
    ("white", &["white", "白", "白色", "белая", "bianco", "백", "백색"]),
    ("black", &["black", "黑", "黑色", "黒", "чёрная", "nero", "흑", "흑색"]),
    ("red", &["red", "红", "红色", "赤", "красная", "rosso", "적", "적색"]),
    ("blue", &["blue", "蓝", "蓝色", "青", "синяя", "blu", "청", "청색"]),
    ("green", &["green", "绿", "绿色", "緑", "зелёная", "verde", "녹", "녹색"]),
];

pub const CARD_TYPES: &[(CardType, &[&str])] = &[
    (CardType::Lrig, &["l", "lrig", "分身", "ルリグ", "идел", "루리그"]),
    (CardType::Signi, &["s", "signi", "精灵", "シグニ", "запись", "시그니"]),
    (CardType::Spell, &["spell", "魔法", "スペル", "магия", "스펠"]),
    (CardType::Arts, &["arts", "必杀", "技艺", "アーツ", "умение", "아츠"]),
    (CardType::Resona, &["resona", "共鸣", "レゾナ", "отголосок", "레조나"]),
];

pub const RARITIES: &[(&str, &[&str])] = &[
    ("c", &["c"]),
    ("r", &["r"]),
    ("lc", &["lc"]),
    ("sr", &["sr"]),
    ("lr", &["lr"]),
    ("st", &["st"]),
    ("pr", &["pr"]),
    ("sp", &["sp"]),
];

pub const RISE: &[&str] = &["rise", "升阶", "ライズ"];
pub const TRAP: &[&str] = &["trap", "陷阱", "陷阱标记", "トラップ"];
pub const ACCE: &[&str] = &["acce", "accessory", "附属", "アクセ"];

pub const SKILLS: &[(EffectGroup, &[&str])] = &[
    (
        EffectGroup::Const,
        &[
            "【常】", "常", "常时", "常时效果", "常時能力", "常時", "常時效果",
            "[constant]", "const", "constant",
            "[постоянно]", "постоянно",
            "상시", "[상시]",
        ],
    ),
    (
        EffectGroup::StartUp,
        &[
            "【出】", "出", "出场", "出场效果", "出场能力", "出現", "出現效果", "出現能力",
            "[on-play]", "[onplay]", "on-play", "onplay",
            "[при вводе]", "при вводе",
            "출현", "[출현]",
        ],
    ),
    (
        EffectGroup::Action,
        &[
            "【起】", "起", "起动", "起动效果", "起动能力", "起動", "起動效果", "起動能力",
            "[action]", "action",
            "[действие]", "действие",
            "기동", "[기동]",
        ],
    ),
    (
        EffectGroup::Burst,
        &[
            "※", "爆发", "迸发", "爆发效果", "迸发效果", "生命爆发", "生命迸发",
            "ライフバースト", "バースト",
            "burst", "lifeburst", "lb",
            "вспышка", "жизненная вспышка",
            "라이프 버스트", "라이프버스트", "버스트",
        ],
    ),
];

pub const NO_BURST: &[&str] = &[
    "无爆发", "无迸发", "noburst",
    "ライフバースト-", "バースト-",
    "迸发-", "爆发-", "burst-", "lifeburst-", "lb-",
    "вспышка-", "жизненная вспышка-",
    "버스트-", "라이프버스트-",
];

pub const CROSS: &[&str] = &[
    "cross", "交错", "クロス", "связь", "크로스",
    "[cross]", ">cross<", "【cross】", "【交错】", "【クロス】", "[связь]", ">크로스<",
];

pub const TIMMINGS: &[(Timming, &[&str])] = &[
    (
        Timming::MainPhase,
        &[
            "主要阶段", "【主要阶段】", "主要",
            "メインフェイズ", "【メインフェイズ】",
            "[mainphase]", "mainphase", "main",
            "[основнаяфаза]", "основнаяфаза", "основная",
            "메인", "메인페이즈", "[메인페이즈]",
        ],
    ),
    (
        Timming::AttackPhase,
        &[
            "攻击阶段", "【攻击阶段】", "攻击",
            "アタックフェイズ", "【アタックフェイズ】",
            "[attackphase]", "attackphase", "attack",
            "[фазаатаки]", "фазаатаки", "атака",
            "어택", "어택페이즈", "[어택페이즈]",
        ],
    ),
    (
        Timming::SpellCutIn,
        &[
            "魔法切入", "【魔法切入】", "切入",
            "スペルカットイン", "【スペルカットイン】",
            "[spellcut-in]", "[cut-in]", "[spellcutin]", "[cutin]", "spellcutin", "cutin", "cut",
            "[ответнамагию]", "[ответ]", "ответнамагию", "ответ",
            "컷인", "[스펠컷인]", "스펠컷인",
        ],
    ),
];

/// Canonical LRIG class names, matched through `Localizer::class_label`.
pub const LRIG_CLASSES: &[&str] = &[
    "タマ", "花代", "ユヅキ", "ピルルク", "エルドラ", "ミルルン", "緑子",
    "アン", "ウリス", "イオナ", "ウムル", "リメンバ", "タウィル", "サシェ",
    "ミュウ", "アイヤイ", "アルフォウ", "ハナレ", "リル", "メル",
    "あや", "ナナシ", "ドーナ", "ママ",
];

/// Canonical SIGNI class names.
pub const SIGNI_CLASSES: &[&str] = &[
    "精像", "天使", "悪魔", "美巧", "精武", "アーム", "ウェポン", "遊具",
    "毒牙", "精羅", "鉱石", "宝石", "植物", "原子", "宇宙", "精械", "電機",
    "古代兵器", "迷宮", "精生", "水獣", "空獣", "地獣", "龍獣", "凶蟲", "精元",
    "武勇", "調理", "トリック", "英知", "微菌", "怪異",
];

pub const POWER: &[&str] = &["力量", "パワー", "power", "сила", "파워"];
pub const LEVEL: &[&str] = &[
    "等级", "レベル", "level", "lv.", "lv", "уровень", "livello", "레벨",
];
pub const LIMIT: &[&str] = &["界限", "リミット", "limite", "limit", "ограничение", "리미트"];

pub const ILLUST: &[&str] = &["illust", "画师", "畫師"];

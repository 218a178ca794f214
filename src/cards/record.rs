//! Card records - static printed card data.
//!
//! A `CardRecord` describes one physical printing. Reprints and alternate
//! arts share a canonical id (`Cid`), which is itself the `Pid` of the
//! canonical printing.

use serde::{Deserialize, Deserializer, Serialize};

/// Printing identifier - one specific print/art of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(pub u32);

impl Pid {
    /// Create a new printing ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pid({})", self.0)
    }
}

/// Canonical card identifier - the card's rules identity.
///
/// A `Cid` names the printing that carries the canonical data, so it
/// converts losslessly into a `Pid` for lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(pub u32);

impl Cid {
    /// Create a new canonical ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The printing that holds the canonical record.
    #[must_use]
    pub const fn as_pid(self) -> Pid {
        Pid(self.0)
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cid({})", self.0)
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Lrig,
    Signi,
    Spell,
    Arts,
    Resona,
}

impl CardType {
    /// Lower-case name used by the search keywords.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CardType::Lrig => "lrig",
            CardType::Signi => "signi",
            CardType::Spell => "spell",
            CardType::Arts => "arts",
            CardType::Resona => "resona",
        }
    }

    /// Spells and arts carry no meaningful level, power or limit.
    #[must_use]
    pub const fn has_stats(self) -> bool {
        !matches!(self, CardType::Spell | CardType::Arts)
    }

    /// Cards that belong in the LRIG deck rather than the main deck.
    #[must_use]
    pub const fn is_lrig_deck_type(self) -> bool {
        matches!(self, CardType::Lrig | CardType::Arts | CardType::Resona)
    }
}

/// Phase at which an ability may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timming {
    #[serde(rename = "mainPhase")]
    MainPhase,
    #[serde(rename = "attackPhase")]
    AttackPhase,
    #[serde(rename = "spellCutIn")]
    SpellCutIn,
}

/// One of the four effect-text groups on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    Const,
    StartUp,
    Action,
    Burst,
}

/// Static card record.
///
/// Field names follow the camelCase card database format, so a database
/// row deserializes directly. Empty `limiting` and cross fields read as unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub pid: Pid,
    pub cid: Cid,
    #[serde(default)]
    pub wxid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rarity: String,
    pub card_type: CardType,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub power: i64,
    /// `/`-delimited LRIG classes this card may be used with.
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub limiting: Option<String>,
    #[serde(default)]
    pub illust: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub guard_flag: bool,
    #[serde(default)]
    pub rise: bool,
    #[serde(default)]
    pub trap: bool,
    #[serde(default)]
    pub acce: bool,
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub cross_left: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub cross_right: Option<String>,
    /// Front face of a double-faced card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_a: Option<Pid>,
    #[serde(default)]
    pub timmings: Vec<Timming>,
    #[serde(default)]
    pub const_effect_texts: Vec<String>,
    #[serde(default)]
    pub start_up_effect_texts: Vec<String>,
    #[serde(default)]
    pub action_effect_texts: Vec<String>,
    #[serde(default)]
    pub burst_effect_texts: Vec<String>,
}

impl CardRecord {
    /// Create a record that is its own canonical printing.
    ///
    /// ## Example
    ///
    /// ```
    /// use wx_deck::cards::{CardRecord, CardType, Pid};
    ///
    /// let card = CardRecord::new(Pid::new(1), "Tama", CardType::Lrig)
    ///     .with_level(0)
    ///     .with_color("white");
    ///
    /// assert_eq!(card.cid.raw(), 1);
    /// assert_eq!(card.level, 0);
    /// ```
    #[must_use]
    pub fn new(pid: Pid, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            pid,
            cid: Cid(pid.0),
            wxid: String::new(),
            name: name.into(),
            rarity: String::new(),
            card_type,
            color: String::new(),
            level: 0,
            limit: 0,
            power: 0,
            limiting: None,
            illust: String::new(),
            classes: Vec::new(),
            guard_flag: false,
            rise: false,
            trap: false,
            acce: false,
            cross_left: None,
            cross_right: None,
            side_a: None,
            timmings: Vec::new(),
            const_effect_texts: Vec::new(),
            start_up_effect_texts: Vec::new(),
            action_effect_texts: Vec::new(),
            burst_effect_texts: Vec::new(),
        }
    }

    /// Point this printing at another canonical record (reprint).
    #[must_use]
    pub fn reprint_of(mut self, cid: Cid) -> Self {
        self.cid = cid;
        self
    }

    #[must_use]
    pub fn with_wxid(mut self, wxid: impl Into<String>) -> Self {
        self.wxid = wxid.into();
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_limiting(mut self, limiting: impl Into<String>) -> Self {
        self.limiting = Some(limiting.into()).filter(|l| !l.is_empty());
        self
    }

    #[must_use]
    pub fn with_illust(mut self, illust: impl Into<String>) -> Self {
        self.illust = illust.into();
        self
    }

    /// Add a class name (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_rise(mut self) -> Self {
        self.rise = true;
        self
    }

    #[must_use]
    pub fn with_trap(mut self) -> Self {
        self.trap = true;
        self
    }

    #[must_use]
    pub fn with_acce(mut self) -> Self {
        self.acce = true;
        self
    }

    #[must_use]
    pub fn with_cross_left(mut self, partner: impl Into<String>) -> Self {
        self.cross_left = Some(partner.into()).filter(|p| !p.is_empty());
        self
    }

    #[must_use]
    pub fn with_cross_right(mut self, partner: impl Into<String>) -> Self {
        self.cross_right = Some(partner.into()).filter(|p| !p.is_empty());
        self
    }

    /// Mark this record as the back face of `front`.
    #[must_use]
    pub fn with_side_a(mut self, front: Pid) -> Self {
        self.side_a = Some(front);
        self
    }

    #[must_use]
    pub fn with_timming(mut self, timming: Timming) -> Self {
        self.timmings.push(timming);
        self
    }

    /// Append a text to one of the effect groups (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, group: EffectGroup, text: impl Into<String>) -> Self {
        let texts = match group {
            EffectGroup::Const => &mut self.const_effect_texts,
            EffectGroup::StartUp => &mut self.start_up_effect_texts,
            EffectGroup::Action => &mut self.action_effect_texts,
            EffectGroup::Burst => &mut self.burst_effect_texts,
        };
        texts.push(text.into());
        self
    }

    /// Texts of an effect group.
    #[must_use]
    pub fn effects(&self, group: EffectGroup) -> &[String] {
        match group {
            EffectGroup::Const => &self.const_effect_texts,
            EffectGroup::StartUp => &self.start_up_effect_texts,
            EffectGroup::Action => &self.action_effect_texts,
            EffectGroup::Burst => &self.burst_effect_texts,
        }
    }

    /// Whether the card carries a life burst.
    #[must_use]
    pub fn has_burst(&self) -> bool {
        !self.burst_effect_texts.is_empty()
    }

    /// Whether either cross link is set.
    #[must_use]
    pub fn has_cross(&self) -> bool {
        self.cross_left.is_some() || self.cross_right.is_some()
    }

    /// Iterate over the `/`-delimited restriction list, if any.
    pub fn limitings(&self) -> impl Iterator<Item = &str> {
        self.limiting.as_deref().into_iter().flat_map(|l| l.split('/'))
    }
}

/// The card database writes `""` for an unset optional text field.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

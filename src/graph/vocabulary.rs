//! Fixed symbol tables for parts of speech and synset relations.
//!
//! Both vocabularies are closed sets known at compile time. Resolving a name
//! from a variant is total; parsing a symbol from the dataset is the only
//! fallible direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordweaveError};

/// Part-of-speech tag of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Adjective,
    Noun,
    Adverb,
    Satellite,
    Verb,
}

impl PartOfSpeech {
    /// All tags in table order.
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Noun,
        PartOfSpeech::Adverb,
        PartOfSpeech::Satellite,
        PartOfSpeech::Verb,
    ];

    /// Parse the single-letter dataset tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(PartOfSpeech::Adjective),
            "n" => Some(PartOfSpeech::Noun),
            "r" => Some(PartOfSpeech::Adverb),
            "s" => Some(PartOfSpeech::Satellite),
            "v" => Some(PartOfSpeech::Verb),
            _ => None,
        }
    }

    /// The dataset tag for this part of speech.
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::Satellite => "s",
            PartOfSpeech::Verb => "v",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Satellite => "Satellite",
            PartOfSpeech::Verb => "Verb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartOfSpeech {
    type Err = WordweaveError;

    fn from_str(tag: &str) -> Result<Self> {
        PartOfSpeech::from_tag(tag)
            .ok_or_else(|| WordweaveError::dataset(format!("Unknown part of speech tag '{tag}'")))
    }
}

/// Typed relation carried by a pointer between two synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelatedForm,
    DomainOfSynsetTopic,
    MemberOfThisDomainTopic,
    DomainOfSynsetRegion,
    MemberOfThisDomainRegion,
    DomainOfSynsetUsage,
    MemberOfThisDomainUsage,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
    DerivedFromAdjective,
}

/// Symbol table in the order the dataset documentation lists it.
///
/// `\` and `\\` both describe the pertainym family; which of the two is the
/// adjective-derived direction is uncertain, and the published names must
/// not change, so the mapping is kept as is.
const RELATION_SYMBOLS: [(&str, Relation); 27] = [
    ("!", Relation::Antonym),
    ("@", Relation::Hypernym),
    ("@i", Relation::InstanceHypernym),
    ("~", Relation::Hyponym),
    ("~i", Relation::InstanceHyponym),
    ("#m", Relation::MemberHolonym),
    ("#s", Relation::SubstanceHolonym),
    ("#p", Relation::PartHolonym),
    ("%m", Relation::MemberMeronym),
    ("%s", Relation::SubstanceMeronym),
    ("%p", Relation::PartMeronym),
    ("=", Relation::Attribute),
    ("+", Relation::DerivationallyRelatedForm),
    (";c", Relation::DomainOfSynsetTopic),
    ("-c", Relation::MemberOfThisDomainTopic),
    (";r", Relation::DomainOfSynsetRegion),
    ("-r", Relation::MemberOfThisDomainRegion),
    (";u", Relation::DomainOfSynsetUsage),
    ("-u", Relation::MemberOfThisDomainUsage),
    ("*", Relation::Entailment),
    (">", Relation::Cause),
    ("^", Relation::AlsoSee),
    ("$", Relation::VerbGroup),
    ("&", Relation::SimilarTo),
    ("<", Relation::ParticipleOfVerb),
    ("\\", Relation::Pertainym),
    ("\\\\", Relation::DerivedFromAdjective),
];

impl Relation {
    /// Parse a pointer symbol from the dataset.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        RELATION_SYMBOLS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, relation)| *relation)
    }

    /// The dataset symbol for this relation.
    pub fn symbol(&self) -> &'static str {
        RELATION_SYMBOLS
            .iter()
            .find(|(_, relation)| relation == self)
            .map(|(symbol, _)| *symbol)
            .unwrap_or_default()
    }

    /// Human-readable name used in relation labels.
    pub fn name(&self) -> &'static str {
        match self {
            Relation::Antonym => "Antonym",
            Relation::Hypernym => "Hypernym",
            Relation::InstanceHypernym => "InstanceHypernym",
            Relation::Hyponym => "Hyponym",
            Relation::InstanceHyponym => "InstanceHyponym",
            Relation::MemberHolonym => "MemberHolonym",
            Relation::SubstanceHolonym => "SubstanceHolonym",
            Relation::PartHolonym => "PartHolonym",
            Relation::MemberMeronym => "MemberMeronym",
            Relation::SubstanceMeronym => "SubstanceMeronym",
            Relation::PartMeronym => "PartMeronym",
            Relation::Attribute => "Attribute",
            Relation::DerivationallyRelatedForm => "DerivationallyRelatedForm",
            Relation::DomainOfSynsetTopic => "DomainOfSynsetTopic",
            Relation::MemberOfThisDomainTopic => "MemberOfThisDomainTopic",
            Relation::DomainOfSynsetRegion => "DomainOfSynsetRegion",
            Relation::MemberOfThisDomainRegion => "MemberOfThisDomainRegion",
            Relation::DomainOfSynsetUsage => "DomainOfSynsetUsage",
            Relation::MemberOfThisDomainUsage => "MemberOfThisDomainUsage",
            Relation::Entailment => "Entailment",
            Relation::Cause => "Cause",
            Relation::AlsoSee => "AlsoSee",
            Relation::VerbGroup => "VerbGroup",
            Relation::SimilarTo => "SimilarTo",
            Relation::ParticipleOfVerb => "ParticipleOfVerb",
            Relation::Pertainym => "Pertainym",
            Relation::DerivedFromAdjective => "DerivedFromAdjective",
        }
    }

    /// Iterate over every relation with its symbol.
    pub fn all() -> impl Iterator<Item = (&'static str, Relation)> {
        RELATION_SYMBOLS.iter().copied()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = WordweaveError;

    fn from_str(symbol: &str) -> Result<Self> {
        Relation::from_symbol(symbol)
            .ok_or_else(|| WordweaveError::dataset(format!("Unknown pointer symbol '{symbol}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tags() {
        assert_eq!(PartOfSpeech::from_tag("n"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_tag("s"), Some(PartOfSpeech::Satellite));
        assert_eq!(PartOfSpeech::from_tag("x"), None);
        assert_eq!(PartOfSpeech::Adverb.name(), "Adverb");

        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
        }
    }

    #[test]
    fn test_relation_symbols() {
        assert_eq!(Relation::from_symbol("@"), Some(Relation::Hypernym));
        assert_eq!(Relation::from_symbol("~i"), Some(Relation::InstanceHyponym));
        assert_eq!(Relation::from_symbol("?"), None);
        assert_eq!(Relation::all().count(), 27);

        for (symbol, relation) in Relation::all() {
            assert_eq!(relation.symbol(), symbol);
        }
    }

    #[test]
    fn test_pertainym_symbols_are_kept_verbatim() {
        assert_eq!(Relation::from_symbol("\\"), Some(Relation::Pertainym));
        assert_eq!(
            Relation::from_symbol("\\\\"),
            Some(Relation::DerivedFromAdjective)
        );
        assert_eq!(Relation::DerivedFromAdjective.name(), "DerivedFromAdjective");
    }

    #[test]
    fn test_parse_errors() {
        assert!("q".parse::<PartOfSpeech>().is_err());
        assert!("%x".parse::<Relation>().is_err());
        assert_eq!("!".parse::<Relation>().unwrap(), Relation::Antonym);
    }
}

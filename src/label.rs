/*!
# Label Representation

Vertices are frequently exchanged as text whose content is a base-10 integer, but all "sorted"
operations must order them **numerically** (`"2"` before `"10"`). A [`Label`] therefore parses its
text exactly once on creation and compares by the parsed value afterwards.

Two labels with equal value but different text (e.g. `"010"` and `"10"`) remain distinct; they are
ordered by their text as a tie-break so that the order stays total and consistent with equality.
*/

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::{edge::Edge, error::LabelError};

/// Numeric value carried by a [`Label`]
pub type LabelValue = i64;

/// A vertex label given as text and ordered by its integer value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    // field order matters: the derived order compares `value` first
    value: LabelValue,
    text: Box<str>,
}

impl Label {
    /// Creates the canonical label of `value`, i.e. its decimal representation
    pub fn new(value: LabelValue) -> Self {
        Self {
            value,
            text: value.to_string().into_boxed_str(),
        }
    }

    /// Parses `text` as a base-10 integer and keeps the original text.
    ///
    /// # Errors
    /// Returns [`LabelError::NotAnInteger`] if `text` is not a valid integer.
    pub fn parse(text: &str) -> Result<Self, LabelError> {
        let value = text
            .parse::<LabelValue>()
            .map_err(|source| LabelError::NotAnInteger {
                text: text.to_owned(),
                source,
            })?;

        Ok(Self {
            value,
            text: text.into(),
        })
    }

    /// Returns the numeric value used for ordering
    pub fn value(&self) -> LabelValue {
        self.value
    }

    /// Returns the text the label was created from
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<LabelValue> for Label {
    fn from(value: LabelValue) -> Self {
        Self::new(value)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Label::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Parses every text into a [`Label`], keeping the input order.
///
/// # Errors
/// Fails on the first text that is not a base-10 integer.
///
/// # Examples
/// ```
/// use relgraph::prelude::*;
///
/// let ls = labels(["10", "2"]).unwrap();
/// assert!(ls[1] < ls[0]);
/// assert!(labels(["1", "x"]).is_err());
/// ```
pub fn labels<I, S>(texts: I) -> Result<Vec<Label>, LabelError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().map(|s| Label::parse(s.as_ref())).collect()
}

/// Parses every `(source, destination)` pair of texts into an [`Edge`] of [`Label`]s.
///
/// # Errors
/// Fails on the first endpoint that is not a base-10 integer.
pub fn label_edges<I, S>(pairs: I) -> Result<Vec<Edge<Label>>, LabelError>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(u, v)| Ok(Edge(Label::parse(u.as_ref())?, Label::parse(v.as_ref())?)))
        .collect()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn label_as_json_string() {
        let label = Label::parse("007").unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#""007""#);

        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
        assert_eq!(back.as_str(), "007");
        assert_eq!(back.value(), 7);
    }

    #[test]
    fn edge_of_labels() {
        let edge = Edge(Label::new(10), Label::new(2));
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"["10","2"]"#);

        let back: Edge<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn non_integer_text_is_rejected() {
        let err = serde_json::from_str::<Label>(r#""x""#).unwrap_err();
        assert!(err.to_string().contains("label `x` is not a base-10 integer"));

        assert!(serde_json::from_str::<Edge<Label>>(r#"["1","x"]"#).is_err());
        assert!(serde_json::from_str::<Label>("7").is_err());
    }
}

//! The closed set of Airtable field kinds

use std::fmt;

/// Field kinds reported by the metadata API in a field's `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    AiText,
    AutoNumber,
    Barcode,
    Button,
    Checkbox,
    Count,
    CreatedBy,
    CreatedTime,
    Currency,
    Date,
    DateTime,
    Duration,
    Email,
    ExternalSyncSource,
    Formula,
    LastModifiedBy,
    LastModifiedTime,
    MultilineText,
    MultipleAttachments,
    MultipleCollaborators,
    MultipleLookupValues,
    MultipleRecordLinks,
    MultipleSelects,
    Number,
    Percent,
    PhoneNumber,
    Rating,
    RichText,
    Rollup,
    SingleCollaborator,
    SingleLineText,
    SingleSelect,
    Url,
    /// A tag outside the set above
    Unknown,
}

const ALL: &[(FieldKind, &str)] = &[
    (FieldKind::AiText, "aiText"),
    (FieldKind::AutoNumber, "autoNumber"),
    (FieldKind::Barcode, "barcode"),
    (FieldKind::Button, "button"),
    (FieldKind::Checkbox, "checkbox"),
    (FieldKind::Count, "count"),
    (FieldKind::CreatedBy, "createdBy"),
    (FieldKind::CreatedTime, "createdTime"),
    (FieldKind::Currency, "currency"),
    (FieldKind::Date, "date"),
    (FieldKind::DateTime, "dateTime"),
    (FieldKind::Duration, "duration"),
    (FieldKind::Email, "email"),
    (FieldKind::ExternalSyncSource, "externalSyncSource"),
    (FieldKind::Formula, "formula"),
    (FieldKind::LastModifiedBy, "lastModifiedBy"),
    (FieldKind::LastModifiedTime, "lastModifiedTime"),
    (FieldKind::MultilineText, "multilineText"),
    (FieldKind::MultipleAttachments, "multipleAttachments"),
    (FieldKind::MultipleCollaborators, "multipleCollaborators"),
    (FieldKind::MultipleLookupValues, "multipleLookupValues"),
    (FieldKind::MultipleRecordLinks, "multipleRecordLinks"),
    (FieldKind::MultipleSelects, "multipleSelects"),
    (FieldKind::Number, "number"),
    (FieldKind::Percent, "percent"),
    (FieldKind::PhoneNumber, "phoneNumber"),
    (FieldKind::Rating, "rating"),
    (FieldKind::RichText, "richText"),
    (FieldKind::Rollup, "rollup"),
    (FieldKind::SingleCollaborator, "singleCollaborator"),
    (FieldKind::SingleLineText, "singleLineText"),
    (FieldKind::SingleSelect, "singleSelect"),
    (FieldKind::Url, "url"),
];

impl FieldKind {
    /// Look up a kind by its wire tag. Tags are case sensitive.
    pub fn from_tag(tag: &str) -> Self {
        ALL.iter()
            .find(|(_, t)| *t == tag)
            .map(|(kind, _)| *kind)
            .unwrap_or(FieldKind::Unknown)
    }

    pub fn is_known(&self) -> bool {
        *self != FieldKind::Unknown
    }

    /// The wire tag for this kind; `Unknown` has none and reads "unknown"
    pub fn as_str(&self) -> &'static str {
        ALL.iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, tag)| *tag)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("singleLineText", FieldKind::SingleLineText)]
    #[case("multipleSelects", FieldKind::MultipleSelects)]
    #[case("multipleRecordLinks", FieldKind::MultipleRecordLinks)]
    #[case("url", FieldKind::Url)]
    fn test_known_tags(#[case] tag: &str, #[case] kind: FieldKind) {
        assert_eq!(FieldKind::from_tag(tag), kind);
        assert!(kind.is_known());
        assert_eq!(kind.as_str(), tag);
    }

    #[rstest]
    #[case("SingleLineText")]
    #[case("spreadsheet")]
    #[case("")]
    fn test_unknown_tags(#[case] tag: &str) {
        let kind = FieldKind::from_tag(tag);
        assert_eq!(kind, FieldKind::Unknown);
        assert!(!kind.is_known());
        assert_eq!(kind.to_string(), "unknown");
    }

    #[test]
    fn test_every_kind_round_trips_through_its_tag() {
        for (kind, tag) in ALL {
            assert_eq!(FieldKind::from_tag(tag), *kind);
        }
    }
}

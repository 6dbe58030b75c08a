//! Canned reservation templates
//!
//! Three named presets used to prefill the booking form. Every call hands
//! out a fresh, independent draft with customer identity and table left
//! unset; mutating a clone never touches the preset or other clones.

use crate::domain::reservation::{ReservationDraft, ReservationKind};
use crate::domain::{DomainError, DomainResult};

/// Fresh draft pre-filled with the preset for `kind`.
pub fn template_for(kind: ReservationKind) -> ReservationDraft {
    let (start, end, party_size) = match kind {
        ReservationKind::Standard => ("19:00", "21:00", 2),
        ReservationKind::Vip => ("20:00", "22:00", 2),
        ReservationKind::Group => ("18:00", "21:00", 8),
    };
    ReservationDraft {
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        party_size: Some(party_size),
        kind: Some(kind),
        ..ReservationDraft::default()
    }
}

/// Resolve a preset by its textual name.
pub fn template_by_name(name: &str) -> DomainResult<ReservationDraft> {
    ReservationKind::parse(name)
        .map(template_for)
        .ok_or_else(|| DomainError::InvalidTemplate(name.to_string()))
}

/// All presets, in display order.
pub fn all_templates() -> Vec<ReservationDraft> {
    ReservationKind::ALL.into_iter().map(template_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_house_defaults() {
        let standard = template_for(ReservationKind::Standard);
        assert_eq!(standard.start_time.as_deref(), Some("19:00"));
        assert_eq!(standard.end_time.as_deref(), Some("21:00"));
        assert_eq!(standard.party_size, Some(2));

        let vip = template_for(ReservationKind::Vip);
        assert_eq!(vip.start_time.as_deref(), Some("20:00"));
        assert_eq!(vip.end_time.as_deref(), Some("22:00"));
        assert_eq!(vip.party_size, Some(2));

        let group = template_for(ReservationKind::Group);
        assert_eq!(group.start_time.as_deref(), Some("18:00"));
        assert_eq!(group.end_time.as_deref(), Some("21:00"));
        assert_eq!(group.party_size, Some(8));
    }

    #[test]
    fn customer_and_table_start_unset() {
        let draft = template_for(ReservationKind::Group);
        assert!(draft.customer_name.is_none());
        assert!(draft.customer_phone.is_none());
        assert!(draft.table_id.is_none());
        assert!(draft.date.is_none());
    }

    #[test]
    fn clones_are_independent() {
        let mut first = template_by_name("vip").unwrap();
        let mut second = template_by_name("vip").unwrap();

        first.customer_name = Some("Ada Lovelace".into());
        second.customer_name = Some("Grace Hopper".into());
        first.party_size = Some(3);

        assert_eq!(first.customer_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(second.customer_name.as_deref(), Some("Grace Hopper"));
        assert_eq!(second.party_size, Some(2));

        // the preset itself is untouched
        let fresh = template_by_name("vip").unwrap();
        assert!(fresh.customer_name.is_none());
        assert_eq!(fresh.party_size, Some(2));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = template_by_name("banquet").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate(name) if name == "banquet"));
    }

    #[test]
    fn all_templates_in_display_order() {
        let kinds: Vec<_> = all_templates().into_iter().filter_map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReservationKind::Standard,
                ReservationKind::Vip,
                ReservationKind::Group
            ]
        );
    }
}

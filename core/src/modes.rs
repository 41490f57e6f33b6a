use once_cell::sync::Lazy;

use crate::error::EngineError;
use crate::model::{Mode, ModeId};

/// Fixed mode catalog, built once at first use and never mutated.
static MODES: Lazy<[Mode; 3]> = Lazy::new(|| {
    [
        Mode {
            id: ModeId::Simple,
            name: "Short & Simple",
            description: "Quick, easy explanation",
        },
        Mode {
            id: ModeId::Detailed,
            name: "Detailed",
            description: "Thorough but clear",
        },
        Mode {
            id: ModeId::Eli5,
            name: "ELI5",
            description: "Explain like I'm 5",
        },
    ]
});

/// All modes in presentation order: simple, detailed, eli5.
pub fn list_modes() -> &'static [Mode] {
    &*MODES
}

/// Metadata for one mode id.
pub fn describe(id: ModeId) -> Result<&'static Mode, EngineError> {
    MODES
        .iter()
        .find(|mode| mode.id == id)
        .ok_or_else(|| EngineError::UnknownMode(id.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_list_modes_order_is_fixed() {
        let ids: Vec<ModeId> = list_modes().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ModeId::Simple, ModeId::Detailed, ModeId::Eli5]);
    }

    #[test]
    fn test_catalog_covers_every_mode_id() {
        for id in all::<ModeId>() {
            let mode = describe(id).unwrap();
            assert_eq!(mode.id, id);
            assert!(!mode.name.is_empty());
            assert!(!mode.description.is_empty());
        }
    }

    #[test]
    fn test_describe_returns_picker_metadata() {
        let eli5 = describe(ModeId::Eli5).unwrap();
        assert_eq!(eli5.name, "ELI5");
        assert_eq!(eli5.description, "Explain like I'm 5");
    }

    #[test]
    fn test_unknown_mode_error_names_the_mode() {
        let err = EngineError::UnknownMode("sarcastic".to_string());
        assert_eq!(err.to_string(), "unknown mode: sarcastic");
    }
}

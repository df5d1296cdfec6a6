//! Font registry: named font blobs validated at registration time.

use std::collections::HashMap;

use super::RenderError;

/// sfnt and collection signatures accepted as font data.
const FONT_MAGIC: [[u8; 4]; 4] = [
    [0x00, 0x01, 0x00, 0x00],
    *b"OTTO",
    *b"true",
    *b"ttcf",
];

/// Registered fonts by family name.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Vec<u8>>,
}

impl FontRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store `data` under `name`, replacing any earlier entry.
    pub fn register(&mut self, name: &str, data: Vec<u8>) -> Result<(), RenderError> {
        validate(name, &data)?;
        tracing::debug!(font = name, bytes = data.len(), "font registered");
        self.fonts.insert(name.to_owned(), data);
        Ok(())
    }

    /// Whether a font is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no font is registered.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Check that `data` looks like a TrueType/OpenType font or collection.
pub fn validate(name: &str, data: &[u8]) -> Result<(), RenderError> {
    let invalid = |reason: &'static str| RenderError::InvalidFont { name: name.to_owned(), reason };
    let magic: [u8; 4] = data
        .get(..4)
        .and_then(|m| m.try_into().ok())
        .ok_or_else(|| invalid("too short"))?;
    if FONT_MAGIC.contains(&magic) {
        Ok(())
    } else {
        Err(invalid("unknown font signature"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ttf() -> Vec<u8> {
        vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x0c]
    }

    #[test]
    fn accepts_known_signatures() {
        assert!(validate("a", &ttf()).is_ok());
        assert!(validate("b", b"OTTO....").is_ok());
        assert!(validate("c", b"ttcf").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = validate("Roboto-Bold", b"<html>").unwrap_err();
        assert_eq!(err.to_string(), "invalid font Roboto-Bold: unknown font signature");
        let err = validate("Roboto-Bold", b"").unwrap_err();
        assert_eq!(err.to_string(), "invalid font Roboto-Bold: too short");
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = FontRegistry::new();
        assert!(reg.is_empty());
        reg.register("Roboto-Regular", ttf()).unwrap();
        reg.register("Roboto-Regular", ttf()).unwrap();
        assert!(reg.contains("Roboto-Regular"));
        assert!(!reg.contains("Roboto-Bold"));
        assert_eq!(reg.len(), 1);
        assert!(reg.register("broken", vec![1, 2, 3, 4]).is_err());
        assert_eq!(reg.len(), 1);
    }
}

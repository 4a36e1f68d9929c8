//! Parámetros de path extraídos por el matcher (`:id`, `:itemId`, ...).

use crate::api::{AppError, AppResult};

/// Parámetros nombrados de una ruta, en el orden en que aparecen en el patrón
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.entries.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Igual que [`get`](Self::get) pero falla con un error de validación
    /// cuando la ruta no declara ese parámetro
    pub fn require(&self, name: &str) -> AppResult<&str> {
        self.get(name)
            .ok_or_else(|| AppError::validation_field(name, "parámetro de ruta requerido"))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_require() {
        let mut params = PathParams::new();
        params.push("itemId", "7".to_string());

        assert_eq!(params.get("itemId"), Some("7"));
        assert_eq!(params.require("itemId").unwrap(), "7");
        assert!(params.get("id").is_none());
        assert!(matches!(
            params.require("id"),
            Err(AppError::ValidationWithField { .. })
        ));
    }

    #[test]
    fn iter_keeps_pattern_order() {
        let mut params = PathParams::new();
        params.push("id", "5".to_string());
        params.push("itemId", "9".to_string());

        let collected: Vec<_> = params.iter().collect();
        assert_eq!(collected, vec![("id", "5"), ("itemId", "9")]);
        assert_eq!(params.len(), 2);
    }
}

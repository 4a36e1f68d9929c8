//! Patrones de path estilo `/comandas/:id/fechar`.
//!
//! Un patrón es una lista de segmentos literales o parámetros. Los literales
//! se comparan sin distinguir mayúsculas (ASCII) y un parámetro captura
//! exactamente un segmento no vacío.

use std::cmp::Ordering;
use std::fmt;

use crate::api::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parsea un patrón. Debe empezar por `/`, los parámetros van con `:` y
    /// un mismo nombre no puede repetirse.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if !raw.starts_with('/') {
            return Err(AppError::Internal(format!(
                "Patrón de ruta '{}' debe empezar por '/'",
                raw
            )));
        }

        let mut segments = Vec::new();
        for part in split_path(raw) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(AppError::Internal(format!(
                        "Patrón de ruta '{}' tiene un parámetro sin nombre",
                        raw
                    )));
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(AppError::Internal(format!(
                        "Patrón de ruta '{}' repite el parámetro '{}'",
                        raw, name
                    )));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if part.is_empty() {
                return Err(AppError::Internal(format!(
                    "Patrón de ruta '{}' tiene un segmento vacío",
                    raw
                )));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Compara el patrón con los segmentos de un path y devuelve los valores
    /// crudos (sin decodificar) de cada parámetro, o `None` si no encaja.
    pub fn capture<'p>(&self, path_segments: &[&'p str]) -> Option<Vec<(&str, &'p str)>> {
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut captures = Vec::new();
        for (segment, value) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Literal(literal) => {
                    if !literal.eq_ignore_ascii_case(value) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    captures.push((name.as_str(), *value));
                }
            }
        }

        Some(captures)
    }

    /// Orden de especificidad: en la primera posición donde difieren, un
    /// literal va antes que un parámetro.
    pub fn specificity_cmp(&self, other: &Self) -> Ordering {
        self.segments
            .iter()
            .map(Segment::is_param)
            .cmp(other.segments.iter().map(Segment::is_param))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Divide un path en segmentos ignorando la `/` inicial y una `/` final.
/// `/` y la cadena vacía no producen segmentos.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> PathPattern {
        PathPattern::parse(raw).unwrap()
    }

    #[test]
    fn parses_literals_and_params() {
        let parsed = pattern("/comandas/:id/fechar");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Literal("comandas".into()),
                Segment::Param("id".into()),
                Segment::Literal("fechar".into()),
            ]
        );
        assert_eq!(parsed.to_string(), "/comandas/:id/fechar");
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert!(PathPattern::parse("comandas").is_err());
        assert!(PathPattern::parse("/comandas/:").is_err());
        assert!(PathPattern::parse("/comandas//fechar").is_err());
        assert!(PathPattern::parse("/a/:id/b/:id").is_err());
    }

    #[test]
    fn split_path_handles_slashes() {
        assert!(split_path("/").is_empty());
        assert!(split_path("").is_empty());
        assert_eq!(split_path("/cardapio"), vec!["cardapio"]);
        assert_eq!(split_path("/cardapio/"), vec!["cardapio"]);
        assert_eq!(split_path("/cardapio/42"), vec!["cardapio", "42"]);
        assert_eq!(split_path("/a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn capture_binds_params() {
        let parsed = pattern("/pedidos/:itemId/status");
        let captured = parsed.capture(&split_path("/pedidos/7/status")).unwrap();
        assert_eq!(captured, vec![("itemId", "7")]);
    }

    #[test]
    fn capture_literals_ignore_ascii_case() {
        let parsed = pattern("/kds/cozinha");
        assert!(parsed.capture(&split_path("/KDS/Cozinha")).is_some());
    }

    #[test]
    fn capture_requires_same_length_and_non_empty_params() {
        let parsed = pattern("/cardapio/:id");
        assert!(parsed.capture(&split_path("/cardapio")).is_none());
        assert!(parsed.capture(&split_path("/cardapio/1/extra")).is_none());
        assert!(parsed.capture(&["cardapio", ""]).is_none());
    }

    #[test]
    fn literal_is_more_specific_than_param() {
        let literal = pattern("/comandas/abertas");
        let param = pattern("/comandas/:id");
        assert_eq!(literal.specificity_cmp(&param), Ordering::Less);
        assert_eq!(param.specificity_cmp(&literal), Ordering::Greater);
        assert_eq!(literal.specificity_cmp(&pattern("/kds/copa")), Ordering::Equal);
    }
}

use serde::{Deserialize, Serialize};

/// Availability flag of a play station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Estado {
    Disponible,
    Ocupado,
}

/// Play station row from the `plays` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Play {
    pub id: i64,
    pub tipo: String,
    pub precio_hora: f64,
    pub mandos_base: Option<i64>,
    pub estado: Option<Estado>,
    pub alquilado_hasta: Option<String>,
    pub descripcion: Option<String>,
}

/// Request body for creating or overwriting a play.
///
/// Every field is optional on the wire: required columns are enforced by the
/// table's `NOT NULL` constraints, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayInput {
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub precio_hora: Option<f64>,
    #[serde(default)]
    pub mandos_base: Option<i64>,
    #[serde(default)]
    pub estado: Option<Estado>,
    #[serde(default)]
    pub alquilado_hasta: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Tournament row from the `torneos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Torneo {
    pub id: i64,
    pub juego: String,
    pub fecha: String,
    pub premio: String,
    pub precio_inscripcion: f64,
    pub participantes: Option<i64>,
    pub inscritos: Option<i64>,
    pub descripcion: Option<String>,
}

/// Request body for creating or overwriting a tournament.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TorneoInput {
    #[serde(default)]
    pub juego: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub premio: Option<String>,
    #[serde(default)]
    pub precio_inscripcion: Option<f64>,
    #[serde(default)]
    pub participantes: Option<i64>,
    #[serde(default)]
    pub inscritos: Option<i64>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// The single contact row from the `config` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactConfig {
    pub whatsapp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfigInput {
    #[serde(default)]
    pub whatsapp: Option<String>,
}

/// Body returned by every `POST` that inserts a row
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_value(Estado::Disponible).unwrap(),
            serde_json::json!("disponible")
        );
        let parsed: Estado = serde_json::from_str("\"ocupado\"").unwrap();
        assert_eq!(parsed, Estado::Ocupado);
        assert!(serde_json::from_str::<Estado>("\"roto\"").is_err());
    }

    #[test]
    fn play_input_accepts_partial_body() {
        let input: PlayInput = serde_json::from_str(r#"{"tipo":"PS5"}"#).unwrap();
        assert_eq!(input.tipo.as_deref(), Some("PS5"));
        assert!(input.precio_hora.is_none());
        assert!(input.estado.is_none());
    }
}

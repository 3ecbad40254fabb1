use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Series {
    pub id: i64,
    pub imagen: Option<String>,
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub subido_hace: Option<String>,
    pub capitulo: Option<ChapterValue>,
}

/// Chapter indicator as the table holds it. Depending on how the external
/// schema declares the column this is text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ChapterValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl ChapterValue {
    fn from_column(row: &AnyRow, column: &str) -> sqlx::Result<Option<Self>> {
        if let Ok(text) = row.try_get::<Option<String>, _>(column) {
            return Ok(text.map(ChapterValue::Text));
        }
        if let Ok(number) = row.try_get::<Option<i64>, _>(column) {
            return Ok(number.map(ChapterValue::Integer));
        }
        row.try_get::<Option<f64>, _>(column)
            .map(|number| number.map(ChapterValue::Decimal))
    }
}

impl<'r> FromRow<'r, AnyRow> for Series {
    fn from_row(row: &'r AnyRow) -> sqlx::Result<Self> {
        Ok(Series {
            id: row.try_get("id")?,
            imagen: row.try_get("imagen")?,
            nombre: row.try_get("nombre")?,
            tipo: row.try_get("tipo")?,
            subido_hace: row.try_get("subido_hace")?,
            capitulo: ChapterValue::from_column(row, "capitulo")?,
        })
    }
}

/// Values bound by create and update. Whatever the body leaves out (or sends
/// as `null`) goes to storage as NULL.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct SeriesPayload {
    pub imagen: Option<String>,
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub subido_hace: Option<String>,
    pub capitulo: Option<String>,
}

impl SeriesPayload {
    /// Unknown keys are ignored. Numbers and booleans are stored as their
    /// text; arrays and objects as their JSON text.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let field = |name: &str| body.get(name).and_then(as_text);

        SeriesPayload {
            imagen: field("imagen"),
            nombre: field("nombre"),
            tipo: field("tipo"),
            subido_hace: field("subido_hace"),
            capitulo: field("capitulo"),
        }
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

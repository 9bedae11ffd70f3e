//! Verification resolver: turns a scanned code plus the current row set into
//! a display-ready verdict.

pub mod resolver;

pub use resolver::{resolve, Verdict};

/// Status columns consulted in order; the first one present on the matched
/// row wins. `estado_texto` is what the document configurator writes; the
/// other two are older sheet layouts still in circulation.
pub const STATUS_COLUMNS: &[&str] = &["estado_texto", "verificacion", "estado"];

/// Trimmed status values accepted as "verified". Comparison is
/// case-sensitive, so the mixed-case variants are enumerated explicitly.
pub const VERIFIED_TOKENS: &[&str] = &[
    "1",
    "True",
    "true",
    "verificado",
    "válido",
    "activo",
    "VERIFICADO",
    "Verificado",
    "si",
    "Sí",
    "yes",
];

// Internal/technical columns never shown on the result page.
pub const HIDDEN_COLUMNS: &[&str] = &[
    "qr_base64",
    "url_verificacion",
    "estado_texto",
    "qr_path",
    "qr_ruta",
    "metadata",
    "id",
];

/// Column name → display label. Columns not listed here fall back to a
/// default humanization (underscores to spaces, title-cased).
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("codigo_unico", "Código único"),
    ("cliente_nombre", "Cliente"),
    ("cliente_nit", "NIT / Identificación"),
    ("tipo_documento", "Tipo de documento"),
    ("numero_documento", "Número de documento"),
    ("fecha_emision", "Fecha de emisión"),
    ("verificacion", "Estado"),
    ("fecha_creacion", "Fecha de registro"),
];

/// Minimum length for a `qr_base64` cell to be treated as a real image
/// payload; anything shorter is a placeholder or truncated value.
pub const QR_MIN_LEN: usize = 50;

//! Error types for the task API client.
//!
//! # Design
//! Every failure the client can hit collapses into `RequestError`, whose
//! `Display` is the message shown to the user. The variants keep enough
//! structure for logging, but callers are expected to treat them uniformly:
//! the controller stores `to_string()` and moves on.
//!
//! The message text is a pure function of the failure (see
//! [`failure_message`]) and matches the deployed web client word for word.

use std::fmt;

use crate::http::TransportError;

/// Text for failures that carry no usable detail.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Ha ocurrido un error desconocido";

/// Map a failure to its display message.
///
/// `status` is `None` when no response was obtained; `underlying` is then
/// the transport's own description. With a response, `status_text` is only
/// consulted for statuses that have no fixed message.
pub fn failure_message(status: Option<u16>, status_text: &str, underlying: &str) -> String {
    let Some(status) = status else {
        if underlying.is_empty() {
            return UNKNOWN_ERROR_MESSAGE.to_string();
        }
        return format!("Error: {underlying}");
    };
    let fixed = match status {
        400 => "Solicitud incorrecta. Verifica los datos enviados.",
        401 => "No autorizado. Verifica tus credenciales.",
        403 => "Acceso prohibido. No tienes permisos para esta acción.",
        404 => "Recurso no encontrado.",
        409 => "Conflicto. El recurso ya existe.",
        422 => "Datos de entrada inválidos.",
        500 => "Error interno del servidor. Intenta más tarde.",
        503 => "Servicio no disponible. El servidor está temporalmente fuera de servicio.",
        _ => return format!("Error del servidor: {status} - {status_text}"),
    };
    fixed.to_string()
}

/// Errors returned by `TaskClient` parse methods and by `TaskList` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No response was obtained.
    Transport(String),

    /// The server answered with a non-2xx status.
    Status { status: u16, status_text: String },

    /// A 2xx response whose body is not the expected JSON. Reported to the
    /// user like any other status-level failure; `detail` is for logs.
    Decode {
        status: u16,
        status_text: String,
        detail: String,
    },

    /// The request payload could not be serialized to JSON.
    Encode(String),
}

impl RequestError {
    /// The user-facing message for this failure.
    pub fn message(&self) -> String {
        match self {
            RequestError::Transport(msg) | RequestError::Encode(msg) => {
                failure_message(None, "", msg)
            }
            RequestError::Status {
                status,
                status_text,
            }
            | RequestError::Decode {
                status,
                status_text,
                ..
            } => failure_message(Some(*status), status_text, ""),
        }
    }

    /// HTTP status of the response, if one was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } | RequestError::Decode { status, .. } => {
                Some(*status)
            }
            RequestError::Transport(_) | RequestError::Encode(_) => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for RequestError {}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        RequestError::Transport(err.0)
    }
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable or flag was set but empty.
    Empty { key: String },

    /// The value is not an `http://` or `https://` URL.
    InvalidUrl { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty { key } => write!(f, "{key} is set but empty"),
            ConfigError::InvalidUrl { key, value } => {
                write!(f, "{key} must be an http(s) URL, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages_per_status() {
        let cases = [
            (400, "Solicitud incorrecta. Verifica los datos enviados."),
            (401, "No autorizado. Verifica tus credenciales."),
            (403, "Acceso prohibido. No tienes permisos para esta acción."),
            (404, "Recurso no encontrado."),
            (409, "Conflicto. El recurso ya existe."),
            (422, "Datos de entrada inválidos."),
            (500, "Error interno del servidor. Intenta más tarde."),
            (
                503,
                "Servicio no disponible. El servidor está temporalmente fuera de servicio.",
            ),
        ];
        for (status, expected) in cases {
            // status text must not leak into fixed messages
            assert_eq!(failure_message(Some(status), "ignored", "ignored"), expected);
        }
    }

    #[test]
    fn unmapped_status_uses_generic_form() {
        assert_eq!(
            failure_message(Some(418), "I'm a teapot", ""),
            "Error del servidor: 418 - I'm a teapot"
        );
        assert_eq!(
            failure_message(Some(502), "Bad Gateway", ""),
            "Error del servidor: 502 - Bad Gateway"
        );
    }

    #[test]
    fn transport_failure_carries_underlying_message() {
        assert_eq!(
            failure_message(None, "", "connection refused"),
            "Error: connection refused"
        );
        assert_eq!(failure_message(None, "", ""), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn mapping_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(failure_message(Some(404), "x", ""), "Recurso no encontrado.");
            assert_eq!(failure_message(Some(409), "y", ""), "Conflicto. El recurso ya existe.");
        }
    }

    #[test]
    fn display_matches_message() {
        let err = RequestError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Recurso no encontrado.");
        assert_eq!(err.status(), Some(404));

        let err: RequestError = TransportError("dns error: no such host".to_string()).into();
        assert_eq!(err.to_string(), "Error: dns error: no such host");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn decode_failure_reports_response_status() {
        let err = RequestError::Decode {
            status: 200,
            status_text: "OK".to_string(),
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.to_string(), "Error del servidor: 200 - OK");
    }
}

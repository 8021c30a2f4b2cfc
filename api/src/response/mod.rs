use serde::Serialize;

/// Envelope for catalog and error responses:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Exercises retrieved"
/// }
/// ```
///
/// Query routes (`/execute`, `/validate`, `/score`, table samples) answer with their own
/// payloads and only use this envelope for request errors.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Error response carrying `T::default()` as data.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

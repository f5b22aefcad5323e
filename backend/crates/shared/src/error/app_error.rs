//! Application Error - Unified error type for the gateway
//!
//! Defines [`AppError`] struct, [`AppResult<T>`] type alias and the
//! [`ErrorEnvelope`] JSON body every failing endpoint returns.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ゲートウェイ全体で使用する標準エラー型です。
/// 内部の詳細は各クレートのエラー型でログに出し、ここには
/// クライアント向けのメッセージだけを載せます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - クライアント向けのエラーメッセージ
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unauthorized, "No session");
/// assert_eq!(err.status_code(), 401);
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// クライアント向けメッセージ
    message: Cow<'static, str>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

/// エラーレスポンスの JSON 本体 `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// クライアントに返すエンベロープを構築
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.message.to_string(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {}

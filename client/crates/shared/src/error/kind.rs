//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum for client-side failures.

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント側の障害分類を定義します。各バリアントは
/// 「どの外部協調者が失敗したか」に対応します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::StorageMiss;
/// assert_eq!(kind.as_str(), "Storage Miss");
/// assert!(kind.is_expected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力検証エラー: ネットワーク到達前に失敗
    Validation,
    /// ネットワーク障害: 応答が得られなかった
    Network,
    /// バックエンドがリクエストを拒否した（detail をそのまま表示）
    Backend,
    /// アイデンティティプロバイダの失敗（ポップアップ中断、トークン交換失敗）
    IdentityProvider,
    /// ブロブストレージの障害
    Storage,
    /// ストレージのルックアップミス（想定内、フォールバックで処理）
    StorageMiss,
    /// 未対応の設定値（未知のプロバイダ名など、即時失敗）
    Unsupported,
    /// 上流では有効だがアプリケーションポリシーで拒否
    PolicyRejected,
    /// 内部エラー
    InternalError,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Network.as_str(), "Network");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Network => "Network",
            ErrorKind::Backend => "Backend",
            ErrorKind::IdentityProvider => "Identity Provider",
            ErrorKind::Storage => "Storage",
            ErrorKind::StorageMiss => "Storage Miss",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::PolicyRejected => "Policy Rejected",
            ErrorKind::InternalError => "Internal Error",
        }
    }

    /// 想定内のエラーかどうかを判定
    ///
    /// ストレージミスはフォールバックで黙って処理されるため `true` を返します。
    #[inline]
    pub const fn is_expected(&self) -> bool {
        matches!(self, ErrorKind::StorageMiss)
    }

    /// 内部エラーかどうかを判定
    ///
    /// これらのエラーは error レベルでログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::InternalError)
    }

    /// 外部協調者へのリクエスト前に発生したかどうかを判定
    ///
    /// `Validation` と `Unsupported` はネットワーク呼び出し前の即時失敗です。
    #[inline]
    pub const fn is_fail_fast(&self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::Unsupported)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::Validation.as_str(), "Validation");
        assert_eq!(ErrorKind::Network.as_str(), "Network");
        assert_eq!(ErrorKind::Backend.as_str(), "Backend");
        assert_eq!(ErrorKind::IdentityProvider.as_str(), "Identity Provider");
        assert_eq!(ErrorKind::Storage.as_str(), "Storage");
        assert_eq!(ErrorKind::StorageMiss.as_str(), "Storage Miss");
        assert_eq!(ErrorKind::Unsupported.as_str(), "Unsupported");
        assert_eq!(ErrorKind::PolicyRejected.as_str(), "Policy Rejected");
        assert_eq!(ErrorKind::InternalError.as_str(), "Internal Error");
    }

    #[test]
    fn test_is_expected() {
        assert!(ErrorKind::StorageMiss.is_expected());
        assert!(!ErrorKind::Storage.is_expected());
        assert!(!ErrorKind::Network.is_expected());
    }

    #[test]
    fn test_is_internal() {
        assert!(ErrorKind::InternalError.is_internal());
        assert!(!ErrorKind::Backend.is_internal());
    }

    #[test]
    fn test_is_fail_fast() {
        assert!(ErrorKind::Validation.is_fail_fast());
        assert!(ErrorKind::Unsupported.is_fail_fast());
        assert!(!ErrorKind::Network.is_fail_fast());
        assert!(!ErrorKind::PolicyRejected.is_fail_fast());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorKind::IdentityProvider).unwrap();
        assert_eq!(json, "\"IDENTITY_PROVIDER\"");
    }
}

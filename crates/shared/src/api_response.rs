//! # API レスポンスエンベロープ
//!
//! 一覧系 API のレスポンス形式 `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// `{ "data": T }` 形式のレスポンス型
///
/// ## 使用例
///
/// ```
/// use sample_api_shared::ApiResponse;
///
/// let response = ApiResponse::new(Vec::<String>::new());
/// assert!(response.data.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}


#[cfg(all(test, feature = "openapi"))]
mod openapi_tests {
    use utoipa::PartialSchema;

    use super::*;

    #[test]
    fn test_api_responseにtoschemaが実装されている() {
        let schema = ApiResponse::<Vec<String>>::schema();
        let utoipa::openapi::RefOr::T(schema) = schema else {
            panic!("expected inline schema, got ref");
        };
        let utoipa::openapi::Schema::Object(obj) = schema else {
            panic!("expected object schema");
        };
        assert!(obj.properties.contains_key("data"));
    }
}

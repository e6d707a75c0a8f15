//! Admin Console Handlers
//!
//! Mutation endpoints for the management console. Every handler here sits
//! behind the admin session middleware; the [`AdminSession`] extension is
//! proof that the gate ran.

use axum::{
    Form, Json,
    extract::{Extension, Multipart, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{
    CompanyInfo, CompanyInfoForm, ContactInfo, ContactInfoForm, ProductCreate, ProductUpdate,
    ProductView,
};
use crate::services::UploadedImage;
use crate::services::content;
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message};

/// POST /update_company - 更新公司信息 (全量替换)
pub async fn update_company(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    Form(form): Form<CompanyInfoForm>,
) -> AppResult<Json<AppResponse<CompanyInfo>>> {
    let info = content::update_company_info(&state.pool, form).await?;
    Ok(ok_with_message(
        info,
        "Company information updated successfully!",
    ))
}

/// POST /update_contact - 更新联系方式 (全量替换)
pub async fn update_contact(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    Form(form): Form<ContactInfoForm>,
) -> AppResult<Json<AppResponse<ContactInfo>>> {
    let info = content::update_contact_info(&state.pool, form).await?;
    Ok(ok_with_message(
        info,
        "Contact information updated successfully!",
    ))
}

/// Parsed multipart form for add_product / update_product
#[derive(Debug, Default)]
struct ProductFormData {
    product_id: Option<i64>,
    category: Option<String>,
    name: Option<String>,
    code: Option<String>,
    description: Option<String>,
    images: Vec<UploadedImage>,
}

async fn parse_product_multipart(multipart: &mut Multipart) -> AppResult<ProductFormData> {
    let mut data = ProductFormData::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "product_id" => {
                let text = field.text().await?;
                let id = text.trim().parse::<i64>().map_err(|_| {
                    AppError::validation(format!("Invalid product_id: {}", text))
                })?;
                data.product_id = Some(id);
            }
            "category" => data.category = Some(field.text().await?),
            "name" => data.name = Some(field.text().await?),
            "code" => data.code = Some(field.text().await?),
            "description" => data.description = Some(field.text().await?),
            "images" => {
                let original_name = field.file_name().map(|s| s.to_string());
                let bytes = field.bytes().await?;
                // Empty file inputs are submitted as nameless/empty parts
                if let Some(original_name) = original_name {
                    if !original_name.is_empty() && !bytes.is_empty() {
                        data.images.push(UploadedImage {
                            original_name,
                            data: bytes.to_vec(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    Ok(data)
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation(format!("Missing field '{}'", field)))
}

/// POST /add_product - 新增产品 (multipart，重复 `images` 文件域)
///
/// 第一张上传的图片成为主图。
pub async fn add_product(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    mut multipart: Multipart,
) -> AppResult<Json<AppResponse<ProductView>>> {
    let form = parse_product_multipart(&mut multipart).await?;
    let create = ProductCreate {
        category: required(form.category, "category")?,
        name: required(form.name, "name")?,
        code: required(form.code, "code")?,
        description: required(form.description, "description")?,
    };

    let view = state.catalog.create_product(create, form.images).await?;
    Ok(ok_with_message(view, "Product added successfully!"))
}

/// POST /update_product - 更新产品 (multipart)
///
/// 新上传的图片追加为非主图；已有图片与主图标记不变。
pub async fn update_product(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    mut multipart: Multipart,
) -> AppResult<Json<AppResponse<ProductView>>> {
    let form = parse_product_multipart(&mut multipart).await?;
    let id = form
        .product_id
        .ok_or_else(|| AppError::validation("Missing field 'product_id'"))?;
    let update = ProductUpdate {
        category: required(form.category, "category")?,
        name: required(form.name, "name")?,
        code: required(form.code, "code")?,
        description: required(form.description, "description")?,
    };

    let view = state.catalog.update_product(id, update, form.images).await?;
    Ok(ok_with_message(view, "Product updated successfully!"))
}

#[derive(Debug, Deserialize)]
pub struct DeleteProductForm {
    pub product_id: i64,
}

/// POST /delete_product - 删除产品及其图片
pub async fn delete_product(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    Form(form): Form<DeleteProductForm>,
) -> AppResult<Json<AppResponse<()>>> {
    state.catalog.delete_product(form.product_id).await?;
    Ok(ok_with_message((), "Product deleted successfully!"))
}

#[derive(Debug, Deserialize)]
pub struct ProductImageForm {
    pub product_id: i64,
    pub image_path: String,
}

/// POST /delete_product_image - 删除单张产品图片
pub async fn delete_product_image(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    Form(form): Form<ProductImageForm>,
) -> AppResult<Json<AppResponse<()>>> {
    state
        .catalog
        .delete_image(form.product_id, &form.image_path)
        .await?;
    Ok(ok_with_message((), "Image deleted successfully!"))
}

/// Legacy response shape kept for the console's primary-image call
#[derive(Debug, Serialize)]
pub struct PrimaryImageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /set_primary_image - 设置主图
///
/// 返回 `{success, error?}` 而非统一响应结构。
pub async fn set_primary_image(
    State(state): State<ServerState>,
    Extension(_session): Extension<AdminSession>,
    Form(form): Form<ProductImageForm>,
) -> Json<PrimaryImageResponse> {
    match state
        .catalog
        .set_primary_image(form.product_id, &form.image_path)
        .await
    {
        Ok(()) => Json(PrimaryImageResponse {
            success: true,
            error: None,
        }),
        Err(e) => Json(PrimaryImageResponse {
            success: false,
            error: Some(e.to_string()),
        }),
    }
}

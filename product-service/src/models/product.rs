use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
    pub id: u64,
}

impl Product {
    pub fn new(draft: ProductDraft, id: u64) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            price: draft.price,
            thumbnail: draft.thumbnail,
            code: draft.code,
            stock: draft.stock,
            id,
        }
    }
}

// 新增产品的请求模型，id 由存储层分配
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
}

impl ProductDraft {
    // 六个字段全部必填，空字符串和 0 都视为缺失
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.description.is_empty()
            && self.price != 0.0
            && !self.thumbnail.is_empty()
            && !self.code.is_empty()
            && self.stock != 0
    }
}

// 更新请求的字段集与 Product 并不一致（nombre/descripcion/categoria），
// 历史遗留的形状，不做合并
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Teclado".to_string(),
            description: "Teclado mecanico".to_string(),
            price: 45.5,
            thumbnail: "img/teclado.png".to_string(),
            code: "TEC-01".to_string(),
            stock: 12,
        }
    }

    #[test]
    fn test_complete_draft() {
        assert!(draft().is_complete());
    }

    #[test]
    fn test_empty_text_field_is_missing() {
        let mut d = draft();
        d.title = String::new();
        assert!(!d.is_complete());

        let mut d = draft();
        d.code = String::new();
        assert!(!d.is_complete());
    }

    #[test]
    fn test_zero_numeric_field_is_missing() {
        let mut d = draft();
        d.price = 0.0;
        assert!(!d.is_complete());

        let mut d = draft();
        d.stock = 0;
        assert!(!d.is_complete());
    }

    #[test]
    fn test_product_keeps_draft_fields() {
        let p = Product::new(draft(), 7);
        assert_eq!(p.id, 7);
        assert_eq!(p.code, "TEC-01");
        assert_eq!(p.price, 45.5);
    }
}

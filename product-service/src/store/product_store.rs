use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::ProductError;
use crate::models::product::{Product, ProductDraft, ProductUpdate};

// 产品存储：读取永远走磁盘文件，写入只落在内存列表上再整体覆盖文件。
// 两者启动时并不互相同步，这是沿用下来的行为，调用方需要自己清楚。
pub struct ProductStore {
    products: Vec<Value>,
    path: PathBuf,
    next_id: u64,
}

impl ProductStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            products: Vec::new(),
            path: path.as_ref().to_path_buf(),
            next_id: 0,
        }
    }

    // 启动时从文件里已有的最大 id 恢复计数器，文件不存在则从 0 开始
    pub async fn recover_next_id(&mut self) -> Result<(), ProductError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => {
                let records: Vec<Value> = serde_json::from_str(&data)?;
                self.next_id = records
                    .iter()
                    .filter_map(|record| record.get("id").and_then(Value::as_u64))
                    .max()
                    .unwrap_or(0);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProductError::Io(e)),
        }
    }

    // 整个文件就是唯一的读取数据源
    pub async fn read_all(&self) -> Result<Vec<Value>, ProductError> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<Value> = serde_json::from_str(&data)?;
        Ok(records)
    }

    // 内存列表整体序列化后覆盖写入，没有原子重命名
    pub async fn persist(&self) -> Result<(), ProductError> {
        let data = serde_json::to_string(&self.products)?;
        tokio::fs::write(&self.path, data).await.map_err(|e| {
            error!("Error al escribir en el archivo: {}", e);
            ProductError::Save(e)
        })
    }

    pub async fn add(&mut self, draft: ProductDraft) -> Result<(), ProductError> {
        let records = self.read_all().await?;

        // 业务编码重复时静默忽略，先于字段校验
        let exists = records
            .iter()
            .any(|record| record.get("code").and_then(Value::as_str) == Some(draft.code.as_str()));

        if exists {
            info!("Producto ya existente");
            return Ok(());
        }

        if !draft.is_complete() {
            return Err(ProductError::Validation);
        }

        self.next_id += 1;
        let product = Product::new(draft, self.next_id);
        self.products.push(serde_json::to_value(&product)?);
        self.persist().await
    }

    pub async fn get_all(&self, limit: Option<usize>) -> Result<Vec<Value>, ProductError> {
        let records = self.read_all().await?;

        Ok(match limit {
            Some(n) => records.into_iter().take(n).collect(),
            None => records,
        })
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Option<Value>, ProductError> {
        let records = self.read_all().await?;

        Ok(records
            .into_iter()
            .find(|record| record.get("id").and_then(Value::as_u64) == Some(id)))
    }

    // 存在性检查读文件，删除动作落在内存列表上
    pub async fn delete_by_id(&mut self, id: u64) -> Result<(), ProductError> {
        let records = self.read_all().await?;

        let exists = records
            .iter()
            .any(|record| record.get("id").and_then(Value::as_u64) == Some(id));

        if exists {
            self.products
                .retain(|record| record.get("id").and_then(Value::as_u64) != Some(id));
            self.persist().await?;
            info!("Producto eliminado");
        } else {
            warn!("Producto no encontrado");
        }

        Ok(())
    }

    // 按文件中的位置索引改内存列表里的同位记录，写的是更新形状的四个字段
    pub async fn update(&mut self, id: u64, update: ProductUpdate) -> Result<(), ProductError> {
        let records = self.read_all().await?;

        let index = records
            .iter()
            .position(|record| record.get("id").and_then(Value::as_u64) == Some(id));

        let entry = index.and_then(|i| self.products.get_mut(i));

        match entry.and_then(Value::as_object_mut) {
            Some(fields) => {
                fields.insert("nombre".to_string(), Value::from(update.nombre));
                fields.insert("descripcion".to_string(), Value::from(update.descripcion));
                fields.insert("categoria".to_string(), Value::from(update.categoria));
                fields.insert("stock".to_string(), Value::from(update.stock));
                self.persist().await?;
                info!("Producto actualizado");
            }
            None => warn!("Producto no encontrado"),
        }

        Ok(())
    }
}

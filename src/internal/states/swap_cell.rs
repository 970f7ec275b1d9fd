//! # SwapCell
//!
//! 只支持「读取当前值」和「整体替换」两种操作的共享容器，基于
//! `tokio::sync::RwLock` + `Arc` 实现。
//!
//! ## 并发保证
//! - 读者拿到的是某一时刻完整值的快照（`Arc<T>`），不会观察到半写入的状态
//! - 写入只能整体替换，不提供按字段修改的入口
//! - 读者持有快照期间，写入不会被阻塞，旧值在最后一个快照释放后回收

use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct SwapCell<T> {
    value: RwLock<Arc<T>>,
}

impl<T> SwapCell<T> {
    pub fn new(value: T) -> Self {
        Self { value: RwLock::new(Arc::new(value)) }
    }

    /// 获取当前值的快照。
    pub async fn get_current(&self) -> Arc<T> {
        Arc::clone(&*self.value.read().await)
    }

    /// 整体替换当前值，返回被替换掉的旧值。
    pub async fn replace(&self, new_value: T) -> Arc<T> {
        let mut guard = self.value.write().await;
        std::mem::replace(&mut *guard, Arc::new(new_value))
    }
}

impl<T: Default> Default for SwapCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

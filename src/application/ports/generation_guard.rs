//! Generation Guard Port - 每脚本生成锁
//!
//! 同一脚本同一时刻只允许一次在途生成。第二次请求直接被拒绝，
//! 不排队。该锁存在于进程内存，不提供跨进程互斥。

use uuid::Uuid;

/// Generation Guard Port
pub trait GenerationGuardPort: Send + Sync {
    /// 尝试为脚本开始一次生成
    ///
    /// 返回 false 表示该脚本已有在途生成
    fn try_begin(&self, script_id: Uuid) -> bool;

    /// 结束脚本的在途生成（成功或失败都必须调用）
    fn end(&self, script_id: Uuid);

    /// 脚本是否正在生成
    fn is_generating(&self, script_id: Uuid) -> bool;
}

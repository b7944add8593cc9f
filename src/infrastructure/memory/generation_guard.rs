//! In-Memory Generation Guard Implementation
//!
//! 基于 DashMap 的每脚本在途生成标记。仅进程内有效，
//! 不提供跨进程互斥（单实例部署假设）。

use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::GenerationGuardPort;

/// 内存生成锁
///
/// script_id -> 在途标记
pub struct InMemoryGenerationGuard {
    in_flight: DashMap<Uuid, ()>,
}

impl InMemoryGenerationGuard {
    pub fn new() -> Self {
        Self {
            in_flight: DashMap::new(),
        }
    }
}

impl Default for InMemoryGenerationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationGuardPort for InMemoryGenerationGuard {
    fn try_begin(&self, script_id: Uuid) -> bool {
        // entry API 保证检查与插入的原子性
        match self.in_flight.entry(script_id) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                tracing::debug!(script_id = %script_id, "Generation already in flight");
                false
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(());
                true
            }
        }
    }

    fn end(&self, script_id: Uuid) {
        self.in_flight.remove(&script_id);
    }

    fn is_generating(&self, script_id: Uuid) -> bool {
        self.in_flight.contains_key(&script_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_blocks_second_attempt() {
        let guard = InMemoryGenerationGuard::new();
        let id = Uuid::new_v4();

        assert!(guard.try_begin(id));
        assert!(guard.is_generating(id));
        assert!(!guard.try_begin(id));
    }

    #[test]
    fn test_end_releases() {
        let guard = InMemoryGenerationGuard::new();
        let id = Uuid::new_v4();

        assert!(guard.try_begin(id));
        guard.end(id);
        assert!(!guard.is_generating(id));
        assert!(guard.try_begin(id));
    }

    #[test]
    fn test_guard_is_per_script() {
        let guard = InMemoryGenerationGuard::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(guard.try_begin(a));
        assert!(guard.try_begin(b));
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let guard = InMemoryGenerationGuard::new();
        guard.end(Uuid::new_v4());
    }
}

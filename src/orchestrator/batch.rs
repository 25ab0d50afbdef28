//! 批量调度
//!
//! 远程服务没有写明并发和频率限制，这里统一用"定长批次 + 批间暂停"的
//! 方式礼貌地推进：一批内并发发起，整批全部结束后暂停固定时长再继续。

use anyhow::Result;
use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

/// 批次处理统计
#[derive(Debug, Default)]
pub struct ChunkStats {
    pub success: usize,
    pub failed: usize,
}

/// 分批并发执行
///
/// 每批最多 `chunk_size` 个条目同时发起，等整批全部落定（无论成败）才进入
/// 下一批；单个条目失败只记录日志并跳过，不影响同批其他条目和后续批次。
/// 除最后一批外，批间暂停 `pause`。
pub async fn run_in_chunks<'a, T, Op, Fut>(
    items: &'a [T],
    chunk_size: usize,
    pause: Duration,
    op: Op,
) -> ChunkStats
where
    T: Display,
    Op: Fn(&'a T) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let chunk_size = chunk_size.max(1);
    let total = items.len();
    let total_chunks = (total + chunk_size - 1) / chunk_size;
    let mut stats = ChunkStats::default();

    for (chunk_index, chunk) in items.chunks(chunk_size).enumerate() {
        let start = chunk_index * chunk_size;
        info!(
            "--- 处理批次: {}/{} (条目 {} 到 {}) ---",
            chunk_index + 1,
            total_chunks,
            start + 1,
            start + chunk.len()
        );

        let results = join_all(chunk.iter().map(|item| op(item))).await;

        for (item, result) in chunk.iter().zip(results) {
            match result {
                Ok(()) => stats.success += 1,
                Err(e) => {
                    stats.failed += 1;
                    error!("条目 {} 处理失败，跳过。({:#})", item, e);
                }
            }
        }

        if chunk_index + 1 < total_chunks {
            info!("批次处理完成。暂停 {} 秒以避免操作频繁...", pause.as_secs());
            sleep(pause).await;
            info!("恢复处理。");
        } else {
            info!("所有批次处理完成，无需暂停。");
        }
    }

    stats
}

/// 顺序请求限流器
///
/// 标题流程里详情获取和重命名都是一次一个地发，按累计请求数限流：
/// 每发满 `batch_size` 次暂停一次；工作集已经发完时不再暂停。
pub struct RequestPacer {
    batch_size: usize,
    pause: Duration,
    /// 日志里请求的叫法，如 "重命名请求"
    action: &'static str,
    sent: usize,
}

impl RequestPacer {
    pub fn new(batch_size: usize, pause: Duration, action: &'static str) -> Self {
        Self {
            batch_size: batch_size.max(1),
            pause,
            action,
            sent: 0,
        }
    }

    /// 记一次请求；到达批次边界且后面还有请求时暂停
    pub async fn tick(&mut self, total: usize) {
        self.sent += 1;
        if self.sent % self.batch_size == 0 && self.sent < total {
            info!(
                "已发送 {} 次{}。暂停 {} 秒以避免操作频繁...",
                self.sent,
                self.action,
                self.pause.as_secs()
            );
            sleep(self.pause).await;
            info!("恢复处理。");
        }
    }
}

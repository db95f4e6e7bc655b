//! 权重分配服务 - 业务能力层
//!
//! 按难度总分把分值随机地分给各测试用例：
//! 1. 每个用例先得到最低权重 0.1
//! 2. 剩余分值按归一化后的随机份额分配，先向下取整
//! 3. 取整剩下的零头按小数部分从大到小逐个补 1
//!
//! 计算全部以"百分之一分"为单位的整数进行，保证总和精确、每个权重不低于最低值，
//! 且每个用例与其精确份额的差距不超过 1。

use rand::Rng;
use tracing::debug;

use crate::error::ScoringError;
use crate::models::{Difficulty, TestCase};

/// 最低权重（百分之一分）
pub const MIN_WEIGHT_CENTS: u64 = 10;

/// 为测试用例分配权重
///
/// `level` 为源文本中的难度原文，会先做规范化和校验。
/// 用例为空时原样返回，不分配权重。
pub fn assign_weights<R: Rng + ?Sized>(
    test_cases: &mut [TestCase],
    level: &str,
    rng: &mut R,
) -> Result<Difficulty, ScoringError> {
    let difficulty = Difficulty::parse(level)?;
    if test_cases.is_empty() {
        return Ok(difficulty);
    }

    let weights = distribute_cents(difficulty.total_score(), test_cases.len(), rng)?;
    for (test_case, cents) in test_cases.iter_mut().zip(weights) {
        test_case.weightage = Some(cents_to_score(cents));
    }

    debug!(
        "已为 {} 个测试用例分配权重，总分 {} ({})",
        test_cases.len(),
        difficulty.total_score(),
        difficulty
    );
    Ok(difficulty)
}

/// 把 `total_score` 分成 `count` 份，单位为百分之一分
pub fn distribute_cents<R: Rng + ?Sized>(
    total_score: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<u64>, ScoringError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let total_cents = u64::from(total_score) * 100;
    let floor_cents = MIN_WEIGHT_CENTS * count as u64;
    if total_cents < floor_cents {
        return Err(ScoringError::ScoreTooSmall { total_score, count });
    }
    let remaining = total_cents - floor_cents;

    let mut parts: Vec<f64> = (0..count).map(|_| rng.random::<f64>()).collect();
    let sum: f64 = parts.iter().sum();
    if sum > 0.0 {
        parts.iter_mut().for_each(|part| *part /= sum);
    } else {
        // 随机数全为 0 时退化为平均分配
        parts.fill(1.0 / count as f64);
    }

    let shares: Vec<f64> = parts.iter().map(|part| part * remaining as f64).collect();
    let mut extras: Vec<u64> = shares
        .iter()
        .map(|share| (share.floor() as u64).min(remaining))
        .collect();

    // 最大余数法：零头依次给小数部分最大的用例
    let leftover = remaining.saturating_sub(extras.iter().sum());
    let mut by_fraction: Vec<usize> = (0..count).collect();
    by_fraction.sort_by(|&a, &b| {
        shares[b]
            .fract()
            .total_cmp(&shares[a].fract())
            .then(a.cmp(&b))
    });
    for &idx in by_fraction.iter().cycle().take(leftover as usize) {
        extras[idx] += 1;
    }

    let weights: Vec<u64> = extras.into_iter().map(|extra| MIN_WEIGHT_CENTS + extra).collect();
    Ok(weights)
}

fn cents_to_score(cents: u64) -> f64 {
    cents as f64 / 100.0
}

//! 计算器核心运算
//!
//! 六种二元运算；除法和取模的右操作数为零时返回领域错误，不会 panic。

use crate::error::{DeskpadError, Result};

/// 加法
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// 减法 (a - b)
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// 乘法
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// 除法 (a / b)，b 为零时报错
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(DeskpadError::math("Cannot divide by zero!"));
    }
    Ok(a / b)
}

/// 幂运算 (a 的 b 次方)
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// 取模 (a % b)，b 为零时报错
pub fn modulo(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(DeskpadError::math("Cannot calculate modulo with zero!"));
    }
    Ok(a % b)
}

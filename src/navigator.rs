//! 对无类型 JSON 树的安全可选路径遍历。
//!
//! 上游的响应没有任何结构保证，所以解析层把每个字段都当作可选值处理。
//! 这个模块是唯一允许把“期望的结构”写成路径的地方；其余所有解析函数
//! 只基于这里的原语做“观察到什么就取什么”。
//!
//! 路径缺失与“值恰好是 `false`/`0`/空字符串”被严格区分：
//! 缺失返回 `None`，falsy 值原样返回。

use serde_json::Value;

/// 路径中的一步：对象键或数组下标。
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// 按键访问对象成员。
    Key(&'a str),
    /// 按下标访问数组元素。
    Index(usize),
}

/// 沿 `path` 逐步下钻，任何一步缺失、为 `null` 或类型不符时返回 `None`。
///
/// 绝不 panic，也绝不为缺失路径构造默认值。
pub fn navigate<'a>(value: &'a Value, path: &[Step<'_>]) -> Option<&'a Value> {
    let mut current = value;
    for step in path {
        current = match *step {
            Step::Key(key) => current.get(key)?,
            Step::Index(index) => current.get(index)?,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// [`navigate`] 后取字符串。值存在但不是字符串时同样返回 `None`。
pub fn navigate_str<'a>(value: &'a Value, path: &[Step<'_>]) -> Option<&'a str> {
    navigate(value, path)?.as_str()
}

/// [`navigate`] 后取无符号整数。
pub fn navigate_u64(value: &Value, path: &[Step<'_>]) -> Option<u64> {
    navigate(value, path)?.as_u64()
}

/// [`navigate`] 后取数组。
pub fn navigate_array<'a>(value: &'a Value, path: &[Step<'_>]) -> Option<&'a Vec<Value>> {
    navigate(value, path)?.as_array()
}

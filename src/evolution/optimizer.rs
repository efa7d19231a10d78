//! 代码优化：两个纯文本改写（循环形式替换、import 排序）
//!
//! 只做窄范围的正则/行级替换，不理解语义：`for i in range(len(arr))` 改写后循环体里的 `arr[i]` 保持原样。

use std::sync::OnceLock;

use regex::Regex;

static RANGE_LEN_LOOP_RE: OnceLock<Regex> = OnceLock::new();

fn range_len_loop_re() -> &'static Regex {
    RANGE_LEN_LOOP_RE.get_or_init(|| {
        Regex::new(r"for\s+(\w+)\s+in\s+range\(len\((\w+)\)\)").expect("loop pattern is valid")
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CodeOptimizer;

impl CodeOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// `for <x> in range(len(<xs>))` → `for <x> in <xs>`
    pub fn optimize_loops(&self, code: &str) -> String {
        range_len_loop_re()
            .replace_all(code, "for ${1} in ${2}")
            .into_owned()
    }

    /// 顶格 `import ` / `from ` 行排序后置顶，其余行保持原相对顺序
    pub fn optimize_imports(&self, code: &str) -> String {
        let (mut imports, others): (Vec<&str>, Vec<&str>) = code
            .split('\n')
            .partition(|line| line.starts_with("import ") || line.starts_with("from "));

        imports.sort_unstable();
        imports.extend(others);
        imports.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_loops_rewrites_header_only() {
        let optimizer = CodeOptimizer::new();
        assert_eq!(
            optimizer.optimize_loops("for i in range(len(arr)):\n    x = arr[i]"),
            "for i in arr:\n    x = arr[i]"
        );
    }

    #[test]
    fn test_optimize_loops_tolerates_whitespace_between_words() {
        let optimizer = CodeOptimizer::new();
        assert_eq!(
            optimizer.optimize_loops("for  idx\tin  range(len(items)):"),
            "for idx in items:"
        );
    }

    #[test]
    fn test_optimize_loops_ignores_variants() {
        let optimizer = CodeOptimizer::new();
        for code in [
            "for i in range( len(arr) ):",
            "for i in range(len(self.arr)):",
            "for i in range(len(arr) - 1):",
            "for i in range(\n    len(arr)):",
        ] {
            assert_eq!(optimizer.optimize_loops(code), code);
        }
    }

    #[test]
    fn test_optimize_loops_multiple_occurrences() {
        let optimizer = CodeOptimizer::new();
        assert_eq!(
            optimizer.optimize_loops("for a in range(len(xs)):\n    for b in range(len(ys)):"),
            "for a in xs:\n    for b in ys:"
        );
    }

    #[test]
    fn test_optimize_imports_sorted_first() {
        let optimizer = CodeOptimizer::new();
        let code = "import sys\nx = 1\nfrom os import path\nimport abc\ny = 2";
        assert_eq!(
            optimizer.optimize_imports(code),
            "from os import path\nimport abc\nimport sys\nx = 1\ny = 2"
        );
    }

    #[test]
    fn test_optimize_imports_ignores_indented() {
        let optimizer = CodeOptimizer::new();
        let code = "def f():\n    import os\n    return os";
        assert_eq!(optimizer.optimize_imports(code), code);
    }

    #[test]
    fn test_optimize_imports_idempotent() {
        let optimizer = CodeOptimizer::new();
        let code = "\nimport z\nprint(1)\nimport a\n\nfrom b import c\n";
        let once = optimizer.optimize_imports(code);
        assert_eq!(optimizer.optimize_imports(&once), once);
    }

    #[test]
    fn test_optimize_imports_empty() {
        assert_eq!(CodeOptimizer::new().optimize_imports(""), "");
    }
}

//! Module dependency graph configuration
//!
//! A dependency graph is static, hand-authored configuration: an ordered
//! list of rules `module -> [required modules]`. A rule means "granting any
//! capability on `module` implies at least read access on every module it
//! requires". The graph never changes during an editing session; two
//! independent graphs exist in the system (organization scope and platform
//! scope) and the resolution logic over either is identical.
//!
//! Rules keep their declaration order: the resolver walks them exactly once
//! per call, and configuration renders in the order it was authored.

use crate::errors::{HrpError, Result};
use crate::permissions::types::ModuleCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One dependency rule: a module and the modules it requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRule {
    pub module: ModuleCode,
    pub requires: Vec<ModuleCode>,
}

impl DependencyRule {
    pub fn new(module: impl Into<ModuleCode>, requires: Vec<ModuleCode>) -> Self {
        Self {
            module: module.into(),
            requires,
        }
    }
}

/// Ordered set of dependency rules for one permission scope
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    rules: Vec<DependencyRule>,
}

impl DependencyGraph {
    /// Build a graph from rules, rejecting duplicate rule modules
    ///
    /// # Arguments
    /// * `rules` - Rules in declaration order (order is preserved)
    pub fn new(rules: Vec<DependencyRule>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.module.as_str()) {
                return Err(HrpError::DuplicateRule(rule.module.as_str().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// Parse a graph from a YAML document
    ///
    /// Format:
    /// ```yaml
    /// - module: employees
    ///   requires: [master_data]
    /// - module: attendance
    ///   requires: [master_data, employees]
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rules: Vec<DependencyRule> = serde_yaml::from_str(yaml)?;
        Self::new(rules)
    }

    /// Load a graph from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[DependencyRule] {
        &self.rules
    }

    /// Modules required by the given module, empty if it has no rule
    pub fn requirements_of(&self, module: &str) -> &[ModuleCode] {
        self.rules
            .iter()
            .find(|r| r.module.as_str() == module)
            .map(|r| r.requires.as_slice())
            .unwrap_or(&[])
    }

    /// Modules whose rule lists the given module as a requirement
    pub fn dependents_of(&self, module: &str) -> Vec<&ModuleCode> {
        self.rules
            .iter()
            .filter(|r| r.requires.iter().any(|d| d.as_str() == module))
            .map(|r| &r.module)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find a dependency cycle, if any
    ///
    /// Diagnostic only, for configuration linting (`hrp graph check`). The
    /// resolver never cycle-checks: a cyclic graph still resolves in one
    /// terminating pass, the result merely lags behind the fully-converged
    /// fixed point until later calls close the chain.
    ///
    /// # Returns
    /// The first cycle found as a module path `[a, b, ..., a]`, or None
    pub fn find_cycle(&self) -> Option<Vec<ModuleCode>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit<'a>(
            graph: &'a DependencyGraph,
            module: &'a ModuleCode,
            marks: &mut std::collections::HashMap<&'a str, Mark>,
            path: &mut Vec<&'a ModuleCode>,
        ) -> Option<Vec<ModuleCode>> {
            match marks.get(module.as_str()) {
                Some(Mark::Done) => return None,
                Some(Mark::Visiting) => {
                    // Close the cycle from the first occurrence on the path
                    let start = path
                        .iter()
                        .position(|m| m.as_str() == module.as_str())
                        .unwrap_or(0);
                    let mut cycle: Vec<ModuleCode> =
                        path[start..].iter().map(|m| (*m).clone()).collect();
                    cycle.push(module.clone());
                    return Some(cycle);
                }
                None => {}
            }

            marks.insert(module.as_str(), Mark::Visiting);
            path.push(module);

            for dep in graph.requirements_of(module.as_str()) {
                if let Some(cycle) = visit(graph, dep, marks, path) {
                    return Some(cycle);
                }
            }

            path.pop();
            marks.insert(module.as_str(), Mark::Done);
            None
        }

        let mut marks = std::collections::HashMap::new();
        let mut path = Vec::new();
        for rule in &self.rules {
            if let Some(cycle) = visit(self, &rule.module, &mut marks, &mut path) {
                return Some(cycle);
            }
        }
        None
    }
}

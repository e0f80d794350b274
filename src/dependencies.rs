use crate::Variable;

/// The implication graph: for every propagated variable, the variables
/// whose values forced it.
///
/// Decisions and base-level facts have no record and are the leaves of
/// every closure.
#[derive(Clone, Debug)]
pub struct Dependencies {
    antecedents: Vec<Option<Vec<Variable>>>,
}

impl Dependencies {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            antecedents: vec![None; num_vars],
        }
    }

    pub fn get(&self, var: Variable) -> Option<&[Variable]> {
        self.antecedents[var].as_deref()
    }

    pub fn contains(&self, var: Variable) -> bool {
        self.antecedents[var].is_some()
    }

    pub(crate) fn record(&mut self, var: Variable, antecedents: Vec<Variable>) {
        debug_assert!(!antecedents.contains(&var));
        self.antecedents[var] = Some(antecedents);
    }

    pub(crate) fn discard(&mut self, var: Variable) {
        self.antecedents[var] = None;
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.antecedents.iter().filter(|x| x.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[test]
fn record_and_discard() {
    let mut dependencies = Dependencies::new(4);
    dependencies.record(3, vec![0, 1]);
    assert_eq!(dependencies.get(3), Some(&[0, 1][..]));
    assert!(dependencies.get(0).is_none());
    assert_eq!(dependencies.len(), 1);

    dependencies.discard(3);
    assert!(dependencies.is_empty());
}

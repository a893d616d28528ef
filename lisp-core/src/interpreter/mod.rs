pub mod config;
pub mod loader;

use std::path::PathBuf;

use crate::{
    analyzer::prelude::{analyze, Analyzed},
    environment::prelude::{EnvId, Environments},
    eval::prelude::{execute, EvalResult},
    expression::prelude::Expression,
    parser::prelude::parse_program,
    primitives,
    utils::prelude::Error,
};

pub use config::Config;

/// The evaluation context: every environment frame plus settings.
///
/// One is built at start-up and handed to every entry point; there is no
/// process-wide state.
#[derive(Debug)]
pub struct Interpreter {
    environments: Environments,
    config: Config,
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let mut environments = Environments::new();
        primitives::install(&mut environments);

        Self {
            environments,
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn global(&self) -> EnvId {
        self.environments.root()
    }

    pub fn environments(&self) -> &Environments {
        &self.environments
    }

    pub fn environments_mut(&mut self) -> &mut Environments {
        &mut self.environments
    }

    pub fn is_evaluating(&self) -> bool {
        self.depth > 0
    }

    /// Analyzes and executes `expression` in the root environment.
    pub fn eval(&mut self, expression: &Expression) -> EvalResult<Expression> {
        let global = self.global();

        self.eval_in(expression, global)
    }

    pub fn eval_in(&mut self, expression: &Expression, env: EnvId) -> EvalResult<Expression> {
        let unit = analyze(expression)?;

        self.execute(&unit, env)
    }

    pub fn execute(&mut self, unit: &Analyzed, env: EnvId) -> EvalResult<Expression> {
        self.depth += 1;
        let result = execute(self, unit, env);
        self.depth -= 1;

        result
    }

    /// Reads every form of `src` and evaluates them in order, stopping at
    /// the first failure.
    pub fn read_eval(&mut self, src: &str) -> Result<Vec<Expression>, Error> {
        let parsed = parse_program(src).map_err(|error| Error::Parse {
            path: PathBuf::from("<input>"),
            src: src.to_string(),
            error,
        })?;

        let mut results = vec![];

        for expression in &parsed.expressions {
            results.push(self.eval(expression)?);
            self.collect_if_needed(&results);
        }

        Ok(results)
    }

    /// Reclaims unreachable frames. Refuses (returning `None`) while an
    /// evaluation is running, since live frames may then be referenced only
    /// from the native stack.
    pub fn collect_garbage(&mut self, live: &[Expression]) -> Option<usize> {
        if self.is_evaluating() {
            return None;
        }

        let mut roots = vec![];

        for value in live {
            value.trace(&mut roots);
        }

        Some(self.environments.collect(&roots))
    }

    /// Collects once enough frames were allocated since the last pass.
    pub fn collect_if_needed(&mut self, live: &[Expression]) -> Option<usize> {
        let threshold = self.config.gc_threshold;

        if threshold == 0 || self.environments.allocated_since_collection() < threshold {
            return None;
        }

        self.collect_garbage(live)
    }
}

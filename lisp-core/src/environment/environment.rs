use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    analyzer::prelude::Parameters,
    eval::prelude::{ArityError, EvalError, EvalResult},
    expression::prelude::{Expression, Symbol},
};

use super::arena::{Arena, ArenaId};

pub type EnvId = ArenaId<Frame>;

/// One layer of bindings plus the frame it was extended from.
#[derive(Debug, Default)]
pub struct Frame {
    pub bindings: HashMap<Symbol, Expression>,
    pub parent: Option<EnvId>,
}

impl Frame {
    pub fn new(parent: Option<EnvId>) -> Self {
        Self {
            bindings: HashMap::new(),
            parent,
        }
    }
}

/// Owns every environment frame of an interpreter.
///
/// The root frame is created with the store and is never reclaimed; all
/// other frames live until a [`Environments::collect`] pass finds them
/// unreachable.
#[derive(Debug)]
pub struct Environments {
    frames: Arena<Frame>,
    root: EnvId,
    allocated: usize,
}

impl Default for Environments {
    fn default() -> Self {
        Self::new()
    }
}

impl Environments {
    pub fn new() -> Self {
        let mut frames = Arena::new();
        let root = frames.alloc(Frame::new(None));

        Self {
            frames,
            root,
            allocated: 0,
        }
    }

    pub fn root(&self) -> EnvId {
        self.root
    }

    pub fn frame(&self, env: EnvId) -> EvalResult<&Frame> {
        self.frames.get(env).ok_or(EvalError::ReclaimedEnvironment)
    }

    fn frame_mut(&mut self, env: EnvId) -> EvalResult<&mut Frame> {
        self.frames.get_mut(env).ok_or(EvalError::ReclaimedEnvironment)
    }

    /// Live frames, the root included.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn allocated_since_collection(&self) -> usize {
        self.allocated
    }

    /// Creates a child of `parent` binding `parameters` to `arguments`
    /// positionally. A rest parameter receives the surplus as a list.
    pub fn extend(
        &mut self,
        parent: EnvId,
        parameters: &Parameters,
        arguments: Vec<Expression>
    ) -> EvalResult<EnvId> {
        self.frame(parent)?;

        ArityError::check(parameters.arity(), arguments.len())?;

        let mut frame = Frame::new(Some(parent));
        let mut arguments = arguments.into_iter();

        for (name, value) in parameters.required.iter().zip(arguments.by_ref()) {
            frame.bindings.insert(name.clone(), value);
        }

        if let Some(rest) = &parameters.rest {
            frame.bindings.insert(rest.clone(), Expression::list(arguments));
        }

        self.allocated += 1;

        Ok(self.frames.alloc(frame))
    }

    /// Binds `name` in `env` itself, shadowing any outer binding.
    pub fn define(&mut self, env: EnvId, name: Symbol, value: Expression) -> EvalResult<()> {
        self.frame_mut(env)?.bindings.insert(name, value);

        Ok(())
    }

    pub fn define_global(&mut self, name: impl Into<Symbol>, value: Expression) {
        if let Some(root) = self.frames.get_mut(self.root) {
            root.bindings.insert(name.into(), value);
        }
    }

    pub fn lookup(&self, env: EnvId, name: &Symbol) -> EvalResult<Expression> {
        let mut current = Some(env);

        while let Some(env) = current {
            let frame = self.frame(env)?;

            if let Some(value) = frame.bindings.get(name) {
                return Ok(value.clone());
            }

            current = frame.parent;
        }

        Err(EvalError::UnboundVariable { name: name.clone() })
    }

    /// Replaces the binding in the nearest frame that has one. Never creates.
    pub fn set_value(&mut self, env: EnvId, name: &Symbol, value: Expression) -> EvalResult<()> {
        let mut current = Some(env);

        while let Some(env) = current {
            let frame = self.frame_mut(env)?;

            if let Some(slot) = frame.bindings.get_mut(name) {
                *slot = value;

                return Ok(());
            }

            current = frame.parent;
        }

        Err(EvalError::UnboundVariable { name: name.clone() })
    }

    /// Frees every frame not reachable from the root or from `live`.
    ///
    /// Must only run when no evaluation is in progress: frames referenced
    /// solely from the native call stack are invisible here.
    pub fn collect(&mut self, live: &[EnvId]) -> usize {
        let mut marked = HashSet::new();
        let mut pending = vec![self.root];
        pending.extend_from_slice(live);

        while let Some(env) = pending.pop() {
            if !marked.insert(env) {
                continue;
            }

            let Some(frame) = self.frames.get(env) else {
                continue;
            };

            pending.extend(frame.parent);

            for value in frame.bindings.values() {
                value.trace(&mut pending);
            }
        }

        let freed = self.frames.retain(|env, _| marked.contains(&env));
        self.allocated = 0;

        debug!(freed, live = self.frames.len(), "collected environment frames");

        freed
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use derive_more::Display;
use log::trace;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
pub enum Op {
    #[display("add")]
    Add,
    #[display("add_monos")]
    AddMonos,
    #[display("mul")]
    Mul,
    #[display("neg")]
    Neg,
    #[display("sub")]
    Sub,
    #[display("pow")]
    Pow,
    #[display("eval")]
    Eval
}

impl Op {
    pub const ALL: [Op; 7] = [Op::Add, Op::AddMonos, Op::Mul, Op::Neg, Op::Sub, Op::Pow, Op::Eval];

    fn index(&self) -> usize {
        *self as usize
    }
}

// Observer of arithmetic calls, installed per thread by `with_hook`.
// Recursive calls are reported too.
pub trait Hook {
    fn on_op(&self, op: Op);
}

#[derive(Default, Debug)]
pub struct OpCounter {
    counts: [Cell<usize>; 7]
}

impl OpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, op: Op) -> usize {
        self.counts[op.index()].get()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.get()).sum()
    }

    pub fn reset(&self) {
        for c in self.counts.iter() {
            c.set(0)
        }
    }
}

impl Hook for OpCounter {
    fn on_op(&self, op: Op) {
        let c = &self.counts[op.index()];
        c.set(c.get() + 1)
    }
}

thread_local! {
    static HOOK: RefCell<Option<Rc<dyn Hook>>> = const { RefCell::new(None) };
}

struct Restore(Option<Rc<dyn Hook>>);

impl Drop for Restore {
    fn drop(&mut self) {
        let prev = self.0.take();
        HOOK.with(|h| *h.borrow_mut() = prev);
    }
}

pub fn with_hook<H, F, T>(hook: Rc<H>, f: F) -> T
where H: Hook + 'static, F: FnOnce() -> T {
    let hook: Rc<dyn Hook> = hook;
    let prev = HOOK.with(|h| h.borrow_mut().replace(hook));
    let _restore = Restore(prev);
    f()
}

pub(crate) fn notify(op: Op) {
    if config::is_trace_enabled() {
        trace!("{op}");
    }

    let hook = HOOK.with(|h| h.borrow().clone());
    if let Some(hook) = hook {
        hook.on_op(op)
    }
}

use std::sync::Mutex;

use async_trait::async_trait;
use healthpipe::error::RunError;
use healthpipe::jobs::INTERPRETER;
use healthpipe::runner::{CommandRunner, Invocation};

/// Outcome a rule assigns to matching invocations.
#[derive(Clone, Copy)]
pub enum Outcome {
    Succeed,
    Exit(i32),
    Missing,
}

struct Rule {
    program: String,
    arg_contains: Option<String>,
    outcome: Outcome,
}

/// Scripted stand-in for the host runner: records every invocation and
/// answers from a fixed rule table. First matching rule wins; anything
/// unmatched succeeds.
pub struct ScriptedRunner {
    rules: Vec<Rule>,
    invocations: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn all_ok() -> Self {
        Self {
            rules: Vec::new(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn rule(mut self, program: &str, arg_contains: Option<&str>, outcome: Outcome) -> Self {
        self.rules.push(Rule {
            program: program.to_string(),
            arg_contains: arg_contains.map(|s| s.to_string()),
            outcome,
        });
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Programs of all recorded invocations, in order.
    pub fn programs(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.program.clone()).collect()
    }

    /// Scripts handed to the interpreter, in order.
    pub fn scripts(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .filter(|i| i.program == INTERPRETER)
            .map(|i| i.args[0].clone())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, inv: &Invocation) -> Result<(), RunError> {
        self.invocations.lock().unwrap().push(inv.clone());

        for rule in &self.rules {
            if rule.program != inv.program {
                continue;
            }
            if let Some(frag) = &rule.arg_contains {
                if !inv.args.iter().any(|a| a.contains(frag.as_str())) {
                    continue;
                }
            }
            return match rule.outcome {
                Outcome::Succeed => Ok(()),
                Outcome::Exit(code) => Err(RunError::NonZero {
                    program: inv.program.clone(),
                    code,
                }),
                Outcome::Missing => Err(RunError::ToolMissing {
                    program: inv.program.clone(),
                }),
            };
        }
        Ok(())
    }
}

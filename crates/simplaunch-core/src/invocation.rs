//! Shared tool invocation builder.
//!
//! This module provides a single abstraction for building the simplifier's
//! positional argument vector, eliminating duplication between call sites.
//! The parameter order and count are a versioned contract with the external
//! tool - passing the wrong count or order silently mis-assigns meaning on
//! the tool side, so both are fixed here and nowhere else.

use std::path::{Path, PathBuf};

use crate::error::{LaunchError, LaunchResult};

/// Version of the positional-argument contract between launcher and tool.
///
/// The external tool reads its parameters purely by position:
///
/// | version | positional parameters after the executable            |
/// |---------|-------------------------------------------------------|
/// | `V1`    | input, output, ratio, normal weight, uv weight        |
/// | `V2`    | `V1` plus a trailing boundary weight                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgContract {
    /// Five positional parameters, no boundary weight.
    V1,
    /// Six positional parameters, boundary weight last.
    V2,
}

impl ArgContract {
    /// Number of positional parameters this contract version renders.
    pub fn positional_arity(self) -> usize {
        match self {
            ArgContract::V1 => 5,
            ArgContract::V2 => 6,
        }
    }
}

/// One run of the external simplifier, immutable once constructed.
///
/// Built fresh per run via [`ToolInvocation::builder`].
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    input: PathBuf,
    output: PathBuf,
    ratio: f64,
    normal_weight: f64,
    uv_weight: f64,
    boundary_weight: Option<f64>,
}

impl ToolInvocation {
    /// Start building an invocation for the given input and output models.
    pub fn builder(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> ToolInvocationBuilder {
        ToolInvocationBuilder::new(input, output)
    }

    /// Path to the input model.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Path the simplified model is written to.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Target triangle ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Which contract version this invocation renders.
    pub fn contract(&self) -> ArgContract {
        if self.boundary_weight.is_some() {
            ArgContract::V2
        } else {
            ArgContract::V1
        }
    }

    /// Render the positional argument vector, in contract order.
    ///
    /// The executable path itself is not included; process backends pass it
    /// as the program.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.input.display().to_string(),
            self.output.display().to_string(),
            render_decimal(self.ratio),
            render_decimal(self.normal_weight),
            render_decimal(self.uv_weight),
        ];
        if let Some(weight) = self.boundary_weight {
            args.push(render_decimal(weight));
        }
        debug_assert_eq!(args.len(), self.contract().positional_arity());
        args
    }
}

/// Builder for [`ToolInvocation`].
///
/// Weights default to the values the tool was tuned with; the boundary
/// weight is only rendered when explicitly set, which selects
/// [`ArgContract::V2`].
#[derive(Debug, Clone)]
pub struct ToolInvocationBuilder {
    input: PathBuf,
    output: PathBuf,
    ratio: f64,
    normal_weight: f64,
    uv_weight: f64,
    boundary_weight: Option<f64>,
}

impl ToolInvocationBuilder {
    fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ratio: 0.5,
            normal_weight: 0.1,
            uv_weight: 0.1,
            boundary_weight: None,
        }
    }

    /// Set the target triangle ratio.
    #[must_use]
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the normal-preservation weight.
    #[must_use]
    pub fn normal_weight(mut self, weight: f64) -> Self {
        self.normal_weight = weight;
        self
    }

    /// Set the UV-preservation weight.
    #[must_use]
    pub fn uv_weight(mut self, weight: f64) -> Self {
        self.uv_weight = weight;
        self
    }

    /// Set the boundary-preservation weight, selecting the six-parameter
    /// contract.
    #[must_use]
    pub fn boundary_weight(mut self, weight: f64) -> Self {
        self.boundary_weight = Some(weight);
        self
    }

    /// Validate parameters and produce the immutable invocation.
    pub fn build(self) -> LaunchResult<ToolInvocation> {
        let parameters: [(&'static str, Option<f64>); 4] = [
            ("ratio", Some(self.ratio)),
            ("normal weight", Some(self.normal_weight)),
            ("uv weight", Some(self.uv_weight)),
            ("boundary weight", self.boundary_weight),
        ];
        for (name, value) in parameters {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(LaunchError::InvalidParameter { name, value });
                }
            }
        }
        Ok(ToolInvocation {
            input: self.input,
            output: self.output,
            ratio: self.ratio,
            normal_weight: self.normal_weight,
            uv_weight: self.uv_weight,
            boundary_weight: self.boundary_weight,
        })
    }
}

/// Render a numeric parameter as decimal text.
///
/// Integral values keep a trailing `.0` so the tool always receives a
/// decimal literal (`2000.0`, not `2000`).
fn render_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Building the per-audience report models of one run.

use crate::category::CategoryMapping;
use crate::error::Result;
use crate::issue::Audience;
use crate::model::{ReportInputs, ReportModel};

/// The internal model of a run and, when requested, the external one.
///
/// The internal model sees both issue mappings. The external model is built
/// from the external mapping only; everything else is shared.
#[derive(Debug, Clone)]
pub struct ReportViews {
    internal: ReportModel,
    external: Option<ReportModel>,
}

impl ReportViews {
    pub fn build(inputs: ReportInputs, client_facing: bool) -> Result<Self> {
        let external_inputs = client_facing.then(|| ReportInputs {
            internal: CategoryMapping::new(),
            ..inputs.clone()
        });

        let internal = ReportModel::new(Audience::Internal, inputs)?;
        log_built(&internal);

        let external = match external_inputs {
            Some(inputs) => {
                let model = ReportModel::new(Audience::External, inputs)?;
                log_built(&model);
                Some(model)
            }
            None => None,
        };

        Ok(ReportViews { internal, external })
    }

    pub fn internal(&self) -> &ReportModel {
        &self.internal
    }

    pub fn external(&self) -> Option<&ReportModel> {
        self.external.as_ref()
    }

    /// Models in build order: internal first.
    pub fn iter(&self) -> impl Iterator<Item = &ReportModel> {
        std::iter::once(&self.internal).chain(self.external.as_ref())
    }
}

fn log_built(model: &ReportModel) {
    tracing::info!(
        audience = %model.audience(),
        version = %model.release().version,
        issues = model.unique_keys().len(),
        "report model ready"
    );
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;

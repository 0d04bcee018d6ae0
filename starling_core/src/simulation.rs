//! Simulation snapshots.
//!
//! Turns the three user inputs (EDV, inotropy %, afterload %) into a
//! baseline scenario plus one scenario per active intervention. Each
//! scenario holds its adjusted parameters, the values at the current EDV and
//! the full curve over the configured range.

use crate::config::SimulationConfig;
use crate::error::ensure_finite;
use crate::presets::{
    BASELINE, DECREASED_AFTERLOAD, INCREASED_AFTERLOAD, NEGATIVE_INOTROPY, POSITIVE_INOTROPY,
};
use crate::{
    cardiac_output, generate_curve, interpolate_bidirectional, CardiacOutput, CardiacParams,
    DataPoint, Error, Result,
};
use serde::{Deserialize, Serialize};

/// Percentage inputs are limited to this magnitude
pub const MAX_INTERVENTION_PCT: f64 = 100.0;

/// A regime shift applied on top of baseline
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intervention {
    Inotropy,
    Afterload,
}

impl Intervention {
    /// Preset reached at +100%
    pub fn positive_target(&self) -> &'static CardiacParams {
        match self {
            Intervention::Inotropy => &POSITIVE_INOTROPY,
            Intervention::Afterload => &INCREASED_AFTERLOAD,
        }
    }

    /// Preset reached at -100%
    pub fn negative_target(&self) -> &'static CardiacParams {
        match self {
            Intervention::Inotropy => &NEGATIVE_INOTROPY,
            Intervention::Afterload => &DECREASED_AFTERLOAD,
        }
    }

    /// Curve label for a given percentage; empty at zero
    pub fn curve_name(&self, pct: f64) -> &'static str {
        match self {
            Intervention::Inotropy if pct > 0.0 => "Positive inotropy",
            Intervention::Inotropy if pct < 0.0 => "Negative inotropy",
            Intervention::Afterload if pct > 0.0 => "Increased afterload",
            Intervention::Afterload if pct < 0.0 => "Decreased afterload",
            _ => "",
        }
    }

    /// Baseline parameters shifted by `pct` percent toward this intervention's targets
    pub fn adjust(&self, pct: f64) -> Result<CardiacParams> {
        interpolate_bidirectional(
            &BASELINE,
            self.positive_target(),
            self.negative_target(),
            pct / 100.0,
        )
    }
}

/// Raw user inputs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationInputs {
    /// End-diastolic volume (mL)
    pub edv: f64,
    /// Inotropy shift in percent, -100 to 100
    pub inotropy_pct: f64,
    /// Afterload shift in percent, -100 to 100
    pub afterload_pct: f64,
}

impl SimulationInputs {
    /// Inputs at the given EDV with no interventions
    pub fn at_edv(edv: f64) -> Self {
        Self {
            edv,
            inotropy_pct: 0.0,
            afterload_pct: 0.0,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("edv", self.edv)?;
        for (name, pct) in [
            ("inotropy", self.inotropy_pct),
            ("afterload", self.afterload_pct),
        ] {
            ensure_finite(name, pct)?;
            if pct.abs() > MAX_INTERVENTION_PCT {
                return Err(Error::InvalidArgument(format!(
                    "{} must be within -100..=100 percent, got {}",
                    name, pct
                )));
            }
        }
        Ok(())
    }
}

/// One evaluated parameter set
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub params: CardiacParams,
    /// Values at the current EDV, full precision
    pub current: CardiacOutput,
    /// Values at the current EDV, rounded for display
    pub point: DataPoint,
    pub curve: Vec<DataPoint>,
}

impl Scenario {
    fn evaluate(
        label: &str,
        params: CardiacParams,
        edv: f64,
        config: &SimulationConfig,
    ) -> Result<Self> {
        let current = cardiac_output(edv, &params)?;
        let curve = generate_curve(&params, config.min_edv, config.max_edv, config.curve_steps)?;
        Ok(Self {
            label: label.to_string(),
            params,
            current,
            point: DataPoint::from_output(edv, current),
            curve,
        })
    }
}

/// Everything the presentation layer needs for one set of inputs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub inputs: SimulationInputs,
    pub heart_rate: f64,
    pub baseline: Scenario,
    pub inotropy: Option<Scenario>,
    pub afterload: Option<Scenario>,
}

impl SimulationSnapshot {
    /// All present scenarios, baseline first
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        std::iter::once(&self.baseline)
            .chain(self.inotropy.as_ref())
            .chain(self.afterload.as_ref())
    }
}

/// Evaluate baseline and any active interventions for `inputs`
///
/// An intervention at exactly 0% produces no scenario.
pub fn simulate(inputs: SimulationInputs, config: &SimulationConfig) -> Result<SimulationSnapshot> {
    inputs.validate()?;

    let baseline = Scenario::evaluate("Baseline", BASELINE, inputs.edv, config)?;

    let intervention_scenario = |intervention: Intervention, pct: f64| -> Result<Option<Scenario>> {
        if pct == 0.0 {
            return Ok(None);
        }
        let params = intervention.adjust(pct)?;
        Scenario::evaluate(intervention.curve_name(pct), params, inputs.edv, config).map(Some)
    };

    let inotropy = intervention_scenario(Intervention::Inotropy, inputs.inotropy_pct)?;
    let afterload = intervention_scenario(Intervention::Afterload, inputs.afterload_pct)?;

    tracing::info!(
        "Simulated EDV {:.0} mL: baseline CO {:.2} L/min, SV {:.1} mL",
        inputs.edv,
        baseline.current.co,
        baseline.current.sv
    );

    Ok(SimulationSnapshot {
        inputs,
        heart_rate: BASELINE.heart_rate,
        baseline,
        inotropy,
        afterload,
    })
}

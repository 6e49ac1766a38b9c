//! Hardware-aware model selection.

use std::cmp::Reverse;
use tracing::info;

use crate::domain::{HardwareProfile, ModelCandidate};
use crate::ports::CoreError;

/// Pick the best candidate for the given hardware.
///
/// 1. A preferred name that prefixes a filename (case-insensitive) wins
///    outright.
/// 2. Candidates above the hardware's parameter ceiling are dropped. If that
///    drops everything, the smallest candidates are kept instead.
/// 3. The winner maximizes `(params, -|quant_rank - target|, file_size)`.
///    Exact ties keep the earliest candidate.
pub fn select_model(
    candidates: &[ModelCandidate],
    hardware: HardwareProfile,
    preferred_name: Option<&str>,
) -> Result<ModelCandidate, CoreError> {
    if candidates.is_empty() {
        return Err(CoreError::NoCandidates);
    }

    if let Some(preferred) = find_preferred(candidates, preferred_name) {
        info!(model = %preferred.file_name(), "Using preferred model");
        return Ok(preferred.clone());
    }

    let target = hardware.target_quant_rank();
    let max_params = hardware.max_param_b();

    let mut eligible: Vec<&ModelCandidate> = candidates
        .iter()
        .filter(|c| c.param_size_b() <= max_params)
        .collect();
    if eligible.is_empty() {
        let smallest = candidates
            .iter()
            .map(ModelCandidate::param_size_b)
            .min()
            .unwrap_or_default();
        eligible = candidates
            .iter()
            .filter(|c| c.param_size_b() == smallest)
            .collect();
    }

    // max_by_key keeps the last maximum, so iterate in reverse to keep the first.
    let chosen = eligible
        .into_iter()
        .rev()
        .max_by_key(|c| {
            (
                c.param_size_b(),
                Reverse(c.quant_rank().abs_diff(target)),
                c.file_size_bytes(),
            )
        })
        .ok_or(CoreError::NoCandidates)?;

    info!(
        model = %chosen.file_name(),
        quant = %chosen.quant_tag(),
        params_b = chosen.param_size_b(),
        vram_mb = hardware.vram_mb,
        target_quant_rank = target,
        max_params_b = max_params,
        "Selected model"
    );
    Ok(chosen.clone())
}

fn find_preferred<'a>(
    candidates: &'a [ModelCandidate],
    preferred_name: Option<&str>,
) -> Option<&'a ModelCandidate> {
    let preferred = preferred_name.map(str::trim).filter(|p| !p.is_empty())?;
    let preferred = preferred.to_lowercase();
    candidates
        .iter()
        .find(|c| c.file_name().to_lowercase().starts_with(&preferred))
}

use serde::{Deserialize, Serialize};

/// One axis tick in domain units with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

// Error thresholds choosing between 1x, 2x, 5x and 10x steps.
const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick indices and increment. A negative increment means values
/// are `index / -increment`, which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round() as i64;
        last = (stop * inc).round() as i64;
        if (first as f64) / inc < start {
            first += 1;
        }
        if (last as f64) / inc > stop {
            last -= 1;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round() as i64;
        last = (stop / inc).round() as i64;
        if (first as f64) * inc < start {
            first += 1;
        }
        if (last as f64) * inc > stop {
            last -= 1;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((first, last, increment))
}

/// Step between adjacent ticks of `linear_ticks(start, stop, count)`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = ordered(start, stop);
    let (_, _, increment) = tick_spec(lo, hi, count as f64)?;
    Some(if increment < 0.0 { 1.0 / -increment } else { increment })
}

/// Roughly `count` evenly spaced "nice" values (multiples of 1, 2 or 5 times a
/// power of ten) inside `[start, stop]`, ascending.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (lo, hi) = ordered(start, stop);
    let Some((first, last, increment)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if last < first {
        return Vec::new();
    }

    (first..=last)
        .map(|index| {
            if increment < 0.0 {
                index as f64 / -increment
            } else {
                index as f64 * increment
            }
        })
        .collect()
}

/// Ticks with labels carrying just enough decimals for the step.
#[must_use]
pub fn axis_ticks(start: f64, stop: f64, count: usize) -> Vec<AxisTick> {
    let decimals = tick_step(start, stop, count).map_or(0, decimals_for_step);
    linear_ticks(start, stop, count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: format_tick_label(value, decimals),
        })
        .collect()
}

#[must_use]
pub fn format_tick_label(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // "-0" and "-0.0" read as noise on an axis.
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        return text[1..].to_owned();
    }
    text
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

fn ordered(start: f64, stop: f64) -> (f64, f64) {
    if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    }
}

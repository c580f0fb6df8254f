/// Number of tick intervals targeted on a value axis.
pub const TARGET_TICKS: usize = 5;

/// One axis tick. The origin tick keeps an empty label so the axis shows
/// its zero line without printing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Snap `upper / target` to a legible step size. Ranges up to 2 always use
/// 0.5; everything else snaps the mantissa of the raw step upward within
/// its decade to 0.1, 0.2, 0.5, or 1 of the magnitude.
pub fn nice_step(upper: f64, target: usize) -> f64 {
    if upper <= 2.0 {
        return 0.5;
    }

    let raw = upper / target as f64;
    let magnitude = 10f64.powf(raw.log10().ceil());
    let normalized = raw / magnitude;

    let snapped = if normalized <= 0.1 {
        0.1
    } else if normalized <= 0.2 {
        0.2
    } else if normalized <= 0.5 {
        0.5
    } else {
        1.0
    };

    snapped * magnitude
}

/// Emit ticks from the origin up to `upper` by the nice step. Degenerate
/// uppers still yield the origin tick.
pub fn build_ticks(upper: f64) -> Vec<Tick> {
    if !upper.is_finite() || upper <= 0.0 {
        return vec![Tick {
            value: 0.0,
            label: String::new(),
        }];
    }

    let step = nice_step(upper, TARGET_TICKS);
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let value = step * f64::from(i);
        if value > upper * (1.0 + 1e-9) {
            break;
        }
        let label = if i == 0 {
            String::new()
        } else if step < 1.0 {
            format!("{value:.1}")
        } else {
            format!("{value:.0}")
        };
        ticks.push(Tick { value, label });
        i += 1;
    }
    ticks
}

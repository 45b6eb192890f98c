use jiff::SpanRelativeTo;

/// Parses a budget in minutes from `HH:MM`, a plain number of minutes, or a
/// duration such as `45m` or `PT1H30M`.
pub fn parse_budget(input: &str) -> Result<f64, String> {
    let input = input.trim();

    if let Some((hours, minutes)) = input.split_once(':') {
        let hours = hours.parse::<u32>().map_err(|_| invalid_budget(input))?;
        let minutes = minutes.parse::<u32>().map_err(|_| invalid_budget(input))?;
        if minutes >= 60 {
            return Err(invalid_budget(input));
        }
        return Ok(f64::from(hours * 60 + minutes));
    }

    if let Ok(minutes) = input.parse::<f64>() {
        return if minutes.is_finite() && minutes >= 0.0 {
            Ok(minutes)
        } else {
            Err(invalid_budget(input))
        };
    }

    let duration = input
        .parse::<jiff::SignedDuration>()
        .or_else(|_| {
            input
                .parse::<jiff::Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
        })
        .map_err(|_| invalid_budget(input))?;

    if duration.is_negative() {
        return Err(invalid_budget(input));
    }

    Ok(duration.as_secs_f64() / 60.0)
}

fn invalid_budget(input: &str) -> String {
    format!("Invalid budget '{input}', expected HH:MM, minutes or a duration")
}

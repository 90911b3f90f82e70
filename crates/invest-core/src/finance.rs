//! Closed-form return formulas shared by the projection and the simulation.

/// Revenue after compounding `base` at `growth` for `periods` periods.
pub fn revenue_at_horizon(base: f64, growth: f64, periods: u32) -> f64 {
    base * (1.0 + growth).powf(f64::from(periods))
}

/// Net gain after tax: projected revenue less principal and cumulative expenses.
pub fn net_gain(revenue: f64, base: f64, expenses: f64, periods: u32, tax_rate: f64) -> f64 {
    (revenue - base - expenses * f64::from(periods)) * (1.0 - tax_rate)
}

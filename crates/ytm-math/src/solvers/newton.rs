//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MAX_STEP_HALVINGS, MIN_DERIVATIVE};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The objective is evaluated before every step; the loop terminates as soon
/// as `|f(x)| <= config.tolerance`, so an initial guess that already satisfies
/// the tolerance returns with zero iterations. `iterations` counts completed
/// update steps.
///
/// The step is damped: while the candidate lands where `f` is not finite
/// (outside its domain, e.g. `(1 + r)^t` with `r < -1`) or does not reduce
/// `|f|`, it is halved, up to [`MAX_STEP_HALVINGS`] times. If no halving
/// helps, the last candidate is taken. A damped step still counts as a
/// single iteration.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// - [`MathError::ConvergenceFailed`] once `max_iterations` steps were taken
///   without meeting the tolerance
/// - [`MathError::DivisionByZero`] if `|f'(x)| < MIN_DERIVATIVE`
/// - [`MathError::NonFinite`] if `f(x)` or `f'(x)` is NaN or infinite, or no
///   halved step brings the iterate back into the domain of `f`
///
/// # Example
///
/// ```rust
/// use ytm_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::new(1e-12, 50)).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut fx = f(x);
    let mut iterations = 0;

    loop {
        if !fx.is_finite() {
            return Err(MathError::non_finite(iterations));
        }

        if fx.abs() <= config.tolerance {
            log::debug!("newton converged: root={x}, iterations={iterations}, residual={fx:.3e}");
            return Ok(SolverResult {
                root: x,
                iterations,
                residual: fx,
            });
        }

        if iterations >= config.max_iterations {
            return Err(MathError::convergence_failed(iterations, fx.abs()));
        }

        let dfx = df(x);

        if !dfx.is_finite() {
            return Err(MathError::non_finite(iterations));
        }

        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero {
                value: dfx,
                iteration: iterations,
            });
        }

        // Backtrack until the step stays in the domain of `f` and reduces |f|
        let mut step = fx / dfx;
        let mut next = x - step;
        let mut f_next = f(next);
        let mut halvings = 0;
        while !accepts_step(fx, next, f_next) && halvings < MAX_STEP_HALVINGS {
            step *= 0.5;
            next = x - step;
            f_next = f(next);
            halvings += 1;
        }

        iterations += 1;
        log::trace!(
            "newton step {iterations}: x={next}, f={f_next:.3e}, f'={dfx:.3e}, halvings={halvings}"
        );

        x = next;
        fx = f_next;
    }
}

fn accepts_step(fx: f64, next: f64, f_next: f64) -> bool {
    next.is_finite() && f_next.is_finite() && f_next.abs() < fx.abs()
}

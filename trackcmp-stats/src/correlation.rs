use crate::errors::TrackStatError;

/// Sample Pearson correlation coefficient for paired series of equal length.
///
/// One forward pass over both inputs, accumulating running sums; nothing is
/// stored. Returns NaN when correlation is undefined: fewer than two pairs,
/// or zero variance in either series. If the inputs differ in length the
/// call fails with [`TrackStatError::LengthMismatch`], but only once at
/// least two pairs were consumed, so short inputs still report NaN.
pub fn pearson_correlation<X, Y>(x: X, y: Y) -> Result<f64, TrackStatError>
where
    X: IntoIterator<Item = f64>,
    Y: IntoIterator<Item = f64>,
{
    let mut xs = x.into_iter();
    let mut ys = y.into_iter();

    let mut n: u64 = 0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;

    let leftover = loop {
        match (xs.next(), ys.next()) {
            (Some(a), Some(b)) => {
                n += 1;
                sum_x += a;
                sum_y += b;
                sum_xx += a * a;
                sum_yy += b * b;
                sum_xy += a * b;
            }
            (None, None) => break false,
            _ => break true,
        }
    };

    if n < 2 {
        return Ok(f64::NAN);
    }
    if leftover {
        return Err(TrackStatError::LengthMismatch);
    }

    let n = n as f64;
    let numerator = sum_xy - (sum_x * sum_y) / n;
    let denominator = ((sum_xx - (sum_x * sum_x) / n) * (sum_yy - (sum_y * sum_y) / n)).sqrt();

    if denominator == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(numerator / denominator)
}

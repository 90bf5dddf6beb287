/// Quadrature decoder working on debounced CLK/DT levels.
///
/// A step is produced only on the CLK edge that leaves the idle level (the
/// falling edge for pulled-up pins). DT is sampled once, at that edge:
/// DT still idle means clockwise (`+1`), DT already active means
/// counter-clockwise (`-1`).
///
/// When CLK and DT change in the same sample the DT level carries no
/// ordering information, so the previously committed direction is repeated.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    idle_level: bool,
    prev_clk: bool,
    prev_dt: bool,
    last_direction: i8,
}

impl QuadratureDecoder {
    pub fn new(idle_level: bool) -> Self {
        Self {
            idle_level,
            prev_clk: idle_level,
            prev_dt: idle_level,
            last_direction: 0,
        }
    }

    /// Take `clk` and `dt` as the current levels without producing a step.
    pub fn reset(&mut self, clk: bool, dt: bool) {
        self.prev_clk = clk;
        self.prev_dt = dt;
        self.last_direction = 0;
    }

    /// Direction of the last committed step, `0` before the first one.
    pub fn last_direction(&self) -> i8 {
        self.last_direction
    }

    /// Decode one pair of stable levels into a step in `{-1, 0, +1}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::input::QuadratureDecoder;
    ///
    /// let mut decoder = QuadratureDecoder::new(true);
    /// // One clockwise detent on pulled-up pins: CLK falls while DT is high.
    /// assert_eq!(decoder.decode(false, true), 1);
    /// assert_eq!(decoder.decode(false, false), 0);
    /// assert_eq!(decoder.decode(true, false), 0);
    /// assert_eq!(decoder.decode(true, true), 0);
    /// ```
    pub fn decode(&mut self, clk: bool, dt: bool) -> i8 {
        let clk_edge = clk != self.prev_clk && clk != self.idle_level;
        let dt_moved = dt != self.prev_dt;
        self.prev_clk = clk;
        self.prev_dt = dt;

        if !clk_edge {
            return 0;
        }

        let step = if dt_moved && self.last_direction != 0 {
            self.last_direction
        } else if dt != clk {
            1
        } else {
            -1
        };

        self.last_direction = step;
        step
    }
}

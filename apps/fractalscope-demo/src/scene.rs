use anyhow::Result;
use fractalscope_core::CoordinateFrame;

/// A unit hypercube tumbling in N dimensions, viewed by dropping every axis past the
/// first two.
#[derive(Debug, Clone)]
pub struct HypercubeScene {
    frame: CoordinateFrame,
    step: CoordinateFrame,
    vertices: Vec<Vec<f64>>,
}

impl HypercubeScene {
    /// `planes` lists the rotation planes applied each tick, all by `angle_per_tick`.
    pub fn new(dims: usize, planes: &[(usize, usize)], angle_per_tick: f64) -> Result<Self> {
        let mut step = CoordinateFrame::identity(dims);
        for &(i, j) in planes {
            let rotation = CoordinateFrame::from_rotation_plane(i, j, angle_per_tick, dims)?;
            step = step.compose(&rotation)?;
        }

        let vertices = (0..1usize << dims)
            .map(|mask| {
                (0..dims)
                    .map(|axis| if mask & (1 << axis) != 0 { 0.5 } else { -0.5 })
                    .collect()
            })
            .collect();

        Ok(Self {
            frame: CoordinateFrame::identity(dims),
            step,
            vertices,
        })
    }

    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    pub fn advance(&mut self) -> Result<()> {
        self.frame = self.frame.compose(&self.step)?;
        Ok(())
    }

    /// World-space vertices projected onto the first two axes.
    pub fn project(&self) -> Result<Vec<(f64, f64)>> {
        self.vertices
            .iter()
            .map(|v| {
                let world = self.frame.apply_to_point(v)?;
                Ok((world[0], world[1]))
            })
            .collect()
    }
}

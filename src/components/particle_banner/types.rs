//! Small value types shared by the scene, particles, and host adapter.

/// A point in canvas-local pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
}

impl Coordinate {
	/// Pointer position meaning "no pointer over the banner".
	pub const OFF_SCREEN: Coordinate = Coordinate {
		x: -9999.0,
		y: -9999.0,
	};

	/// Point at (x, y).
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance in pixels.
	pub fn distance_to(self, other: Coordinate) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// The same point measured from `origin` instead of (0, 0).
	///
	/// Turns viewport (client) coordinates into host-local ones when `origin`
	/// is the host's bounding-rect corner.
	pub fn relative_to(self, origin: Coordinate) -> Coordinate {
		Coordinate::new(self.x - origin.x, self.y - origin.y)
	}

	/// True only for [`Coordinate::OFF_SCREEN`].
	pub fn is_off_screen(self) -> bool {
		self == Self::OFF_SCREEN
	}
}

/// Id of a pending animation-frame request, used only to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

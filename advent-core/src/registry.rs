//! Registry mapping (year, day) to puzzle factories

use crate::error::{ParseError, PuzzleError, RegistrationError};
use crate::instance::{DynPuzzle, PuzzleInstance};
use crate::solver::Puzzle;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat store covers (2015..2015+MAX_YEARS)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total slots in the flat store
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for year/day, or None when out of bounds
#[inline]
fn slot_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Inverse of [`slot_index`]
#[inline]
fn slot_year_day(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory turning raw input into a ready-to-solve puzzle instance.
///
/// The returned instance may borrow from the input, hence the higher-ranked
/// lifetime.
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + Send + Sync>;

/// Metadata for one registered puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts the puzzle answers
    pub parts: u8,
}

struct Entry {
    factory: PuzzleFactory,
    parts: u8,
}

/// Builder assembling an immutable [`PuzzleRegistry`].
///
/// Registration happens through the fluent API, either per puzzle type or in
/// bulk from the plugins collected by `#[derive(RegisterPuzzle)]`. Duplicate
/// and out-of-range registrations are rejected up front.
///
/// # Example
///
/// ```no_run
/// # use advent_core::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl RegistryBuilder {
    /// New builder with every slot empty
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a puzzle type for a year and day.
    ///
    /// # Returns
    /// * `Ok(Self)` - registered, ready for chaining
    /// * `Err(RegistrationError)` - slot taken or year/day out of range
    pub fn register<P>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        P: Puzzle + 'static,
    {
        self.register_factory(year, day, P::PARTS, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<P>::new(year, day, input)?))
        })
    }

    /// Register a factory closure with an explicit part count.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(Entry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every plugin collected through `inventory`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins matching a filter predicate.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_core::RegistryBuilder;
    /// // Only 2023 puzzles tagged "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|p| p.year == 2023 && p.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = plugin.puzzle.register_into(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finish building; the registry is immutable from here on.
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable puzzle lookup built by [`RegistryBuilder`]
pub struct PuzzleRegistry {
    entries: Vec<Option<Entry>>,
}

impl PuzzleRegistry {
    /// Parse `input` with the registered puzzle for a year and day.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynPuzzle>)` - parsed instance, borrowing from `input`
    /// * `Err(PuzzleError)` - no such puzzle, or parsing failed
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, PuzzleError> {
        let index = slot_index(year, day).ok_or(PuzzleError::InvalidYearDay(year, day))?;
        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(PuzzleError::NotFound(year, day))?;

        (entry.factory)(input).map_err(PuzzleError::Parse)
    }

    /// Metadata for every registered puzzle, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = slot_year_day(i);
                PuzzleInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Metadata for one year and day, if registered
    pub fn get_info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        slot_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| PuzzleInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Whether a puzzle is registered for this year and day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Number of registered puzzles
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no puzzle is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Type-erased self-registration, so plugins for puzzles with different
/// `Data` types can live in one `inventory` collection.
///
/// Blanket-implemented for every `Puzzle + Sync + 'static`; there is no
/// reason to implement it by hand.
pub trait RegisterablePuzzle: Sync {
    /// Register this puzzle type into the builder for a year and day.
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the puzzle answers
    fn parts(&self) -> u8;
}

impl<P> RegisterablePuzzle for P
where
    P: Puzzle + Sync + 'static,
{
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<P>(year, day)
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}

/// One collected `#[derive(RegisterPuzzle)]` registration.
///
/// # Example
///
/// ```no_run
/// use advent_core::{ParseError, Puzzle, PuzzleInput, PuzzlePlugin, SolveError};
///
/// struct Day1;
///
/// impl PuzzleInput for Day1 {
///     type Data<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::Data<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Puzzle for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok("42".to_string()),
///             other => Err(SolveError::PartNotImplemented(other)),
///         }
///     }
/// }
///
/// inventory::submit! {
///     PuzzlePlugin {
///         year: 2023,
///         day: 1,
///         puzzle: &Day1,
///         tags: &["2023"],
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle, type-erased
    pub puzzle: &'static dyn RegisterablePuzzle,
    /// Tags for registry-time filtering (e.g. "2023", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(PuzzlePlugin);

//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Puzzle id reserved for the template puzzle every new day starts from
pub const TEMPLATE_ID: u8 = 0;
/// Highest puzzle id (one puzzle per day, 25 days)
pub const MAX_ID: u8 = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_ID as usize + 1;

/// Calculate flat index from a puzzle id, returning None if out of bounds
#[inline]
fn calc_index(id: u8) -> Option<usize> {
    (id <= MAX_ID).then_some(id as usize)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle id (day number)
    pub id: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Parts left out of batch runs
    pub skip_in_batch: &'static [u8],
}

impl FactoryInfo {
    /// Whether this entry is the template puzzle
    pub fn is_template(&self) -> bool {
        self.id == TEMPLATE_ID
    }
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    skip_in_batch: &'static [u8],
}

impl SolverFactoryEntry {
    fn info(&self, id: u8) -> FactoryInfo {
        FactoryInfo {
            id,
            parts: self.parts,
            skip_in_batch: self.skip_in_batch,
        }
    }
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// Every puzzle is registered explicitly under its id. The builder rejects
/// duplicate and out-of-range ids, and the registry is immutable after
/// construction.
///
/// # Example
///
/// ```
/// use aoc_solver::{
///     Answer, AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
/// };
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
///         Ok(shared.lines().count().into())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register::<Day1>(1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(1, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver type under a puzzle id
    ///
    /// Creates a factory that parses the input and wraps it in a
    /// [`SolverInstance`].
    pub fn register<S>(self, id: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(id, S::PARTS, S::SKIP_IN_BATCH, move |input: &str| {
            let instance = SolverInstance::<S>::new(id, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register a solver factory with explicit metadata
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Id out of range, already registered, or no parts
    pub fn register_factory<F>(
        mut self,
        id: u8,
        parts: u8,
        skip_in_batch: &'static [u8],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + 'static,
    {
        let index = calc_index(id).ok_or(RegistrationError::InvalidPuzzleId(id))?;
        if parts == 0 {
            return Err(RegistrationError::NoParts(id));
        }
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(id));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            skip_in_batch,
        });
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps puzzle ids to factory functions that create solver instances.
/// Iteration is always in ascending id order.
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a puzzle
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Invalid id, solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        id: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(id).ok_or(SolverError::InvalidPuzzleId(id))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(id))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.as_ref().map(|e| e.info(i as u8)))
    }

    /// Get metadata for a specific puzzle
    pub fn get_info(&self, id: u8) -> Option<FactoryInfo> {
        calc_index(id)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| e.info(id))
    }

    /// Check if a factory exists for the puzzle
    pub fn contains(&self, id: u8) -> bool {
        self.get_info(id).is_some()
    }

    /// The registered puzzle with the highest id, excluding the template
    pub fn latest(&self) -> Option<FactoryInfo> {
        self.iter_info().filter(|info| !info.is_template()).last()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

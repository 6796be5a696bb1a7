//! Prime factorization with shared sub-factorizations, and primitive roots.
//!
//! A [`FactorFamily`] owns every factorization reachable from one integer by
//! peeling its smallest or largest prime. Peeled children are interned by
//! their remaining value, so two peeling orders that arrive at the same value
//! hand back the same node. Families are meant to live for one transform call.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use num_integer::{Integer, Roots};
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::error::DftError;

/// One interned factorization: the contiguous run `factors[lo..hi]` of the
/// family's sorted prime list.
#[derive(Debug)]
struct FactorNode {
    value: u32,
    lo: usize,
    hi: usize,
}

/// Arena of factorizations derived from a single integer.
pub struct FactorFamily {
    factors: Vec<u32>,
    nodes: Mutex<HashMap<u32, Arc<FactorNode>>>,
    root: Arc<FactorNode>,
}

impl FactorFamily {
    /// Factor `n` (n ≥ 1) by trial division.
    pub fn new(n: u32) -> Result<Self, DftError> {
        if n == 0 {
            return Err(DftError::EmptySequence);
        }
        let factors = trial_division(n);
        let root = Arc::new(FactorNode {
            value: n,
            lo: 0,
            hi: factors.len(),
        });
        let mut nodes = HashMap::new();
        nodes.insert(n, Arc::clone(&root));
        Ok(Self {
            factors,
            nodes: Mutex::new(nodes),
            root,
        })
    }

    /// The factorization of the original integer.
    #[must_use]
    pub fn root(&self) -> Factorization<'_> {
        Factorization {
            family: self,
            node: Arc::clone(&self.root),
        }
    }

    /// Number of distinct factorizations interned so far.
    #[must_use]
    pub fn interned(&self) -> usize {
        self.nodes.lock().len()
    }

    fn intern(&self, value: u32, lo: usize, hi: usize) -> Factorization<'_> {
        let node = {
            let mut nodes = self.nodes.lock();
            Arc::clone(
                nodes
                    .entry(value)
                    .or_insert_with(|| Arc::new(FactorNode { value, lo, hi })),
            )
        };
        Factorization { family: self, node }
    }
}

impl fmt::Debug for FactorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactorFamily")
            .field("value", &self.root.value)
            .field("factors", &self.factors)
            .finish_non_exhaustive()
    }
}

/// Factor `n` into a [`FactorFamily`].
pub fn factorize(n: u32) -> Result<FactorFamily, DftError> {
    FactorFamily::new(n)
}

/// A handle to one interned factorization inside a [`FactorFamily`].
#[derive(Clone)]
pub struct Factorization<'f> {
    family: &'f FactorFamily,
    node: Arc<FactorNode>,
}

impl<'f> Factorization<'f> {
    /// The integer this factorization represents.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.node.value
    }

    /// Prime factors in non-decreasing order.
    #[must_use]
    pub fn factors(&self) -> &'f [u32] {
        &self.family.factors[self.node.lo..self.node.hi]
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.node.value == 1
    }

    #[must_use]
    pub fn is_prime(&self) -> bool {
        self.node.hi - self.node.lo == 1
    }

    #[must_use]
    pub fn lowest(&self) -> Option<u32> {
        self.factors().first().copied()
    }

    #[must_use]
    pub fn highest(&self) -> Option<u32> {
        self.factors().last().copied()
    }

    /// Remove the smallest factor.
    pub fn separate_lowest(&self) -> Result<(u32, Factorization<'f>), DftError> {
        let factor = self.lowest().ok_or(DftError::FullyPeeled)?;
        let child = self
            .family
            .intern(self.node.value / factor, self.node.lo + 1, self.node.hi);
        Ok((factor, child))
    }

    /// Remove the largest factor.
    pub fn separate_highest(&self) -> Result<(u32, Factorization<'f>), DftError> {
        let factor = self.highest().ok_or(DftError::FullyPeeled)?;
        let child = self
            .family
            .intern(self.node.value / factor, self.node.lo, self.node.hi - 1);
        Ok((factor, child))
    }

    /// Whether both handles point at the same interned node.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl PartialEq for Factorization<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.value == other.node.value
    }
}

impl Eq for Factorization<'_> {}

impl fmt::Debug for Factorization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factorization")
            .field("value", &self.node.value)
            .field("factors", &self.factors())
            .finish()
    }
}

fn trial_division(n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut remaining = n;
    while remaining.is_even() && remaining > 1 {
        factors.push(2);
        remaining /= 2;
    }
    let mut divisor = 3;
    while divisor <= remaining.sqrt() {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }
    if remaining > 1 {
        factors.push(remaining);
    }
    factors
}

/// Distinct prime factors of `n`, ascending.
#[must_use]
pub fn distinct_prime_factors(n: u32) -> Vec<u32> {
    let mut factors = trial_division(n);
    factors.dedup();
    factors
}

/// `base^exp mod modulus` by square-and-multiply.
#[must_use]
pub fn mod_pow(base: u32, exp: u32, modulus: u32) -> u32 {
    if modulus == 1 {
        return 0;
    }
    let m = u64::from(modulus);
    let mut result = 1u64;
    let mut base = u64::from(base) % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    let result = result as u32;
    result
}

/// Minimal generator of the multiplicative group modulo a prime, with its
/// power and discrete-logarithm tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveRootTable {
    prime: u32,
    root: u32,
    powers: Vec<u32>,
    logs: Vec<u32>,
}

impl PrimitiveRootTable {
    /// The modulus.
    #[must_use]
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// The generator g.
    #[must_use]
    pub fn root(&self) -> u32 {
        self.root
    }

    /// `g^n mod p`, for `n` in `0..p-1`.
    #[must_use]
    pub fn power(&self, n: usize) -> u32 {
        self.powers[n]
    }

    /// The exponent `n` with `g^n mod p == r`, for `r` in `1..p`.
    #[must_use]
    pub fn log(&self, r: u32) -> u32 {
        self.logs[r as usize - 1]
    }

    /// Order of the group, `p - 1`.
    #[must_use]
    pub fn order(&self) -> usize {
        self.powers.len()
    }
}

/// Search the smallest primitive root of `p` and tabulate its powers.
///
/// `p` must be an odd prime. Composite moduli are not detected; the search
/// either finds no generator or builds a table with no meaning.
pub fn minimal_primitive_root(p: u32) -> Result<PrimitiveRootTable, DftError> {
    if p < 3 || p.is_even() {
        return Err(DftError::InvalidModulus(p));
    }
    let order = p - 1;
    let root = if p == 3 {
        2
    } else {
        let divisors = distinct_prime_factors(order);
        (2..p)
            .find(|&a| divisors.iter().all(|&q| mod_pow(a, order / q, p) != 1))
            .ok_or(DftError::NoPrimitiveRoot(p))?
    };

    let mut powers = Vec::with_capacity(order as usize);
    let mut logs = vec![0u32; order as usize];
    let mut current = 1u64;
    for n in 0..order {
        #[allow(clippy::cast_possible_truncation)]
        let residue = current as u32;
        powers.push(residue);
        if residue != 0 {
            logs[residue as usize - 1] = n;
        }
        current = current * u64::from(root) % u64::from(p);
    }
    debug!(prime = p, root, "built primitive root table");
    Ok(PrimitiveRootTable {
        prime: p,
        root,
        powers,
        logs,
    })
}

/// Lazily-built primitive-root tables, one per prime, shared by all callers.
#[derive(Debug, Default)]
pub struct PrimitiveRootCache {
    tables: RwLock<HashMap<u32, Arc<PrimitiveRootTable>>>,
}

impl PrimitiveRootCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the table for `p`, building it on first request.
    pub fn table(&self, p: u32) -> Result<Arc<PrimitiveRootTable>, DftError> {
        if let Some(table) = self.tables.read().get(&p) {
            return Ok(Arc::clone(table));
        }
        let mut tables = self.tables.write();
        if let Some(table) = tables.get(&p) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(minimal_primitive_root(p)?);
        tables.insert(p, Arc::clone(&table));
        Ok(table)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

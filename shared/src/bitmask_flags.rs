use num_traits::{One, PrimInt};

/// Trait implemented by flag enums declared with [`define_bitmask_flags!`].
///
/// The enum's discriminant (via `#[repr(u8)]`) is the bit index. The backing integer is chosen
/// through the associated `Storage`.
pub trait FlagBitmask: Sized + Copy + 'static {
    type Storage: PrimInt;

    /// Every variant in declaration order.
    const ALL: &'static [Self];

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }

    /// Looks up a variant by bit index. `None` for indices past the last variant.
    fn from_bit_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// A plain bitmask container over a [`FlagBitmask`] enum.
///
/// Hosts store the raw `bits` (e.g. a `u32` column) and rebuild the container on load.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    /// Number of set bits.
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

/// Declare a bitmask-backed enum and implement [`FlagBitmask`] for it.
///
/// Example:
/// ```rust
/// shared::define_bitmask_flags!(Unlock, u16, {
///     Lightning,
///     Cryo,
///     Air,
/// });
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::bitmask_flags::FlagBitmask for $name {
            type Storage = $storage;

            const ALL: &'static [Self] = &[$($name::$variant),*];

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

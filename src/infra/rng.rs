use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RNG интерфейс для сид-данных.
///
/// Ядро переходов не использует случайность вообще; RNG нужен только
/// фабрике начального состояния (стеки игроков) и подбору имени
/// для случайной регистрации.
pub trait RandomSource {
    /// Случайное число в `[low, high)`. При `high <= low` возвращает `low`.
    fn between(&mut self, low: u64, high: u64) -> u64;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.between(0, items.len() as u64) as usize;
        items.get(idx)
    }
}

/// Системный RNG (thread_rng).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Детерминированный RNG для тестов и воспроизводимых сид-данных.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }
}

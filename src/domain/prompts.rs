//! Writing prompts shown above the journal editor

use rand::Rng;

pub const WRITING_PROMPTS: [&str; 8] = [
    "What are you grateful for today?",
    "Describe your perfect lazy day...",
    "What's on your mind right now?",
    "Write about a peaceful moment you experienced...",
    "What helps you relax the most?",
    "If you could do anything right now, what would it be?",
    "Describe the sounds around you...",
    "What's something that made you smile today?",
];

/// Pick a prompt at random, avoiding `previous` so a refresh always changes it
pub fn pick_prompt<R: Rng + ?Sized>(rng: &mut R, previous: Option<&str>) -> &'static str {
    let candidates: Vec<&'static str> = WRITING_PROMPTS
        .iter()
        .copied()
        .filter(|p| Some(*p) != previous)
        .collect();

    if candidates.is_empty() {
        return WRITING_PROMPTS[0];
    }
    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prompt_comes_from_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let prompt = pick_prompt(&mut rng, None);
        assert!(WRITING_PROMPTS.contains(&prompt));
    }

    #[test]
    fn test_refresh_never_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = pick_prompt(&mut rng, None);
        for _ in 0..100 {
            let next = pick_prompt(&mut rng, Some(previous));
            assert_ne!(next, previous);
            previous = next;
        }
    }
}

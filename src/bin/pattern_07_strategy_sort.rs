// Strategy: the sorter delegates to whichever sort algorithm it currently
// holds, and the algorithm can be swapped at runtime.

use rand::Rng;

trait SortStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &mut [i32]);
}

// =============================================================================
// Concrete strategies
// =============================================================================

struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, data: &mut [i32]) {
        let n = data.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }
}

struct QuickSort;

impl QuickSort {
    // Lomuto partition, last element as pivot.
    fn quicksort(data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let pivot_index = Self::partition(data);
        let (left, right) = data.split_at_mut(pivot_index);
        Self::quicksort(left);
        Self::quicksort(&mut right[1..]);
    }

    fn partition(data: &mut [i32]) -> usize {
        let high = data.len() - 1;
        let pivot = data[high];
        let mut i = 0;
        for j in 0..high {
            if data[j] <= pivot {
                data.swap(i, j);
                i += 1;
            }
        }
        data.swap(i, high);
        i
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort(&self, data: &mut [i32]) {
        Self::quicksort(data);
    }
}

/// Baseline strategy delegating to the standard library.
struct StdSort;

impl SortStrategy for StdSort {
    fn name(&self) -> &'static str {
        "std sort_unstable"
    }

    fn sort(&self, data: &mut [i32]) {
        data.sort_unstable();
    }
}

// =============================================================================
// Context
// =============================================================================

struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    fn sort(&self, data: &mut [i32]) {
        self.strategy.sort(data);
    }
}

fn main() {
    let input = vec![3, 4, 2, 1, 6, 5];

    println!("=== Same input, two strategies ===");
    let mut sorter = Sorter::new(Box::new(BubbleSort));
    let mut bubble_data = input.clone();
    sorter.sort(&mut bubble_data);
    println!("{}: {bubble_data:?}", sorter.strategy_name());

    sorter.set_strategy(Box::new(QuickSort));
    let mut quick_data = input.clone();
    sorter.sort(&mut quick_data);
    println!("{}: {quick_data:?}", sorter.strategy_name());

    println!("\n=== Cross-check on random input ===");
    let mut rng = rand::thread_rng();
    let random: Vec<i32> = (0..12).map(|_| rng.gen_range(-50..50)).collect();
    println!("input: {random:?}");
    for strategy in [
        Box::new(BubbleSort) as Box<dyn SortStrategy>,
        Box::new(QuickSort),
        Box::new(StdSort),
    ] {
        let mut data = random.clone();
        strategy.sort(&mut data);
        println!("{:>18}: {data:?}", strategy.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_copy(strategy: &dyn SortStrategy, input: &[i32]) -> Vec<i32> {
        let mut data = input.to_vec();
        strategy.sort(&mut data);
        data
    }

    #[test]
    fn test_bubble_sort_orders_the_demo_input() {
        assert_eq!(
            sorted_copy(&BubbleSort, &[3, 4, 2, 1, 6, 5]),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_quicksort_orders_the_demo_input() {
        assert_eq!(
            sorted_copy(&QuickSort, &[3, 4, 2, 1, 6, 5]),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_strategies_handle_edge_inputs() {
        for strategy in [&BubbleSort as &dyn SortStrategy, &QuickSort] {
            assert_eq!(sorted_copy(strategy, &[]), Vec::<i32>::new());
            assert_eq!(sorted_copy(strategy, &[1]), vec![1]);
            assert_eq!(sorted_copy(strategy, &[2, 2, 2]), vec![2, 2, 2]);
            assert_eq!(sorted_copy(strategy, &[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_strategies_agree_on_random_input() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let len = rng.gen_range(0..40);
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();

            let expected = sorted_copy(&StdSort, &input);
            assert_eq!(sorted_copy(&BubbleSort, &input), expected);
            assert_eq!(sorted_copy(&QuickSort, &input), expected);
        }
    }

    #[test]
    fn test_sorter_delegates_to_current_strategy() {
        let sorter = Sorter::new(Box::new(BubbleSort));
        let mut data = vec![9, 1, 8];
        sorter.sort(&mut data);
        assert_eq!(data, vec![1, 8, 9]);
        assert_eq!(sorter.strategy_name(), "bubble sort");
    }

    #[test]
    fn test_strategy_swap_changes_nothing_observable() {
        let mut sorter = Sorter::new(Box::new(BubbleSort));
        let mut first = vec![4, 2, 7, 7, -1];
        sorter.sort(&mut first);

        sorter.set_strategy(Box::new(QuickSort));
        assert_eq!(sorter.strategy_name(), "quicksort");
        let mut second = vec![4, 2, 7, 7, -1];
        sorter.sort(&mut second);

        assert_eq!(first, second);
    }
}

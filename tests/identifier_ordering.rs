//! End-to-end ordering behaviour across identifiers from multiple senders.

use std::cmp::Ordering;

use anycast_wire::{MessageId, UuidAddress};
use proptest::prelude::*;

fn id(addr_bits: u64, counter: i64) -> MessageId<UuidAddress> {
    MessageId::new(UuidAddress::new(addr_bits, addr_bits), counter)
}

#[test]
fn two_senders_agree_on_one_global_order() {
    let addr_a = UuidAddress::new(1, 1);
    let addr_b = UuidAddress::new(2, 2);
    assert!(addr_a < addr_b);

    let i1 = MessageId::new(addr_a, 1);
    let i2 = MessageId::new(addr_b, 1);
    let i3 = MessageId::new(addr_a, 2);

    assert_eq!(i1.cmp(&i2), Ordering::Less);
    assert_eq!(i1.cmp(&i3), Ordering::Less);
    assert_eq!(i2.cmp(&i3), Ordering::Less);

    let mut delivery_order = vec![i3, i2, i1];
    delivery_order.sort_unstable();
    assert_eq!(delivery_order, vec![i1, i2, i3]);
}

prop_compose! {
    fn arb_id()(addr_bits in any::<u64>(), counter in any::<i64>()) -> MessageId<UuidAddress> {
        id(addr_bits, counter)
    }
}

proptest! {
    #[test]
    fn comparison_is_antisymmetric(a in arb_id(), b in arb_id()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn comparison_is_transitive(a in arb_id(), b in arb_id(), c in arb_id()) {
        let mut sorted = [a, b, c];
        sorted.sort_unstable();
        prop_assert!(sorted[0] <= sorted[1] && sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn smaller_counter_always_sorts_first(
        addr_small in any::<u64>(),
        addr_large in any::<u64>(),
        counter in any::<i64>(),
    ) {
        prop_assume!(counter < i64::MAX);
        let first = id(addr_small, counter);
        let second = id(addr_large, counter + 1);
        prop_assert_eq!(first.cmp(&second), Ordering::Less);
    }

    #[test]
    fn equal_identifiers_compare_equal(addr_bits in any::<u64>(), counter in any::<i64>()) {
        let a = id(addr_bits, counter);
        let b = id(addr_bits, counter);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}

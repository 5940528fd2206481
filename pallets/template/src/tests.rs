use crate::{mock::*, Call, DoSomething, Error, Event, Pallet};
use codec::Encode;
use frame_support::{assert_noop, assert_ok};

#[test]
fn do_something_stores_value() {
    new_test_ext().execute_with(|| {
        assert_ok!(TemplateModule::do_something(RuntimeOrigin::signed(ALICE), 42));
        assert_eq!(TemplateModule::something(), Some(42));

        System::assert_last_event(Event::SomethingStored { something: 42, who: ALICE }.into());
    });
}

#[test]
fn genesis_value_is_stored() {
    new_test_ext_with(Some(7)).execute_with(|| {
        assert_eq!(TemplateModule::something(), Some(7));
    });
}

#[test]
fn cause_error_fails_when_unset() {
    new_test_ext().execute_with(|| {
        assert_noop!(
            TemplateModule::cause_error(RuntimeOrigin::signed(ALICE)),
            Error::<Test>::NoneValue
        );
    });
}

#[test]
fn cause_error_increments() {
    new_test_ext().execute_with(|| {
        assert_ok!(TemplateModule::do_something(RuntimeOrigin::signed(ALICE), 1));
        assert_ok!(TemplateModule::cause_error(RuntimeOrigin::signed(BOB)));
        assert_eq!(TemplateModule::something(), Some(2));
    });
}

#[test]
fn cause_error_fails_on_overflow() {
    new_test_ext_with(Some(u32::MAX)).execute_with(|| {
        assert_noop!(
            TemplateModule::cause_error(RuntimeOrigin::signed(ALICE)),
            Error::<Test>::StorageOverflow
        );
    });
}

#[test]
fn put_and_delete_number() {
    new_test_ext().execute_with(|| {
        assert_ok!(TemplateModule::put_number(RuntimeOrigin::signed(ALICE), 9));
        assert_ok!(TemplateModule::put_number(RuntimeOrigin::signed(BOB), 3));
        assert_eq!(TemplateModule::number(ALICE), 9);
        assert_eq!(TemplateModule::number(BOB), 3);

        assert_ok!(TemplateModule::delete_number(RuntimeOrigin::signed(ALICE)));
        assert_eq!(TemplateModule::number(ALICE), 0);
        assert_eq!(TemplateModule::number(BOB), 3);

        System::assert_last_event(Event::SomethingDeleted { who: ALICE }.into());
    });
}

#[test]
fn helpers_work() {
    new_test_ext().execute_with(|| {
        assert_ok!(Pallet::<Test>::update_storage(11));
        assert_eq!(TemplateModule::something(), Some(11));

        assert_eq!(<Pallet<Test> as DoSomething>::increase_value(1), 6);
        assert_eq!(<Pallet<Test> as DoSomething>::increase_value(u32::MAX), u32::MAX);
    });
}

#[test]
fn call_indices_follow_declaration_order() {
    assert_eq!(Call::<Test>::do_something { something: 1 }.encode(), vec![0, 1, 0, 0, 0]);
    assert_eq!(Call::<Test>::put_number { number: 2 }.encode(), vec![1, 2, 0, 0, 0]);
    assert_eq!(Call::<Test>::delete_number {}.encode(), vec![2]);
    assert_eq!(Call::<Test>::cause_error {}.encode(), vec![3]);
}

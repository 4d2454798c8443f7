use rand::prelude::*;
use resource_model::core::ResourceState;
use resource_model::{
    DispatchPolicy, Job, PendingSet, ResourceError, ResourceEvent, SharedResource,
};

fn tick_until_complete(resource: &mut SharedResource) -> Job {
    for _ in 0..10_000 {
        if let Some(job) = resource.tick() {
            return job;
        }
    }
    panic!("resource never completed a job");
}

#[test]
fn test_single_job_lifecycle() {
    let mut resource = SharedResource::new(DispatchPolicy::Fcfs);
    resource.submit(Job::new(1, 0, 3));

    for expected in 1..=3 {
        assert_eq!(resource.tick(), None);
        assert_eq!(resource.elapsed(), expected);
    }

    let done = resource.tick().unwrap();
    assert_eq!(done.id, 1);
    assert_eq!(resource.state(), ResourceState::Idle);

    assert_eq!(resource.tick(), None);
    assert_eq!(resource.state(), ResourceState::Idle);
}

#[test]
fn test_fcfs_queueing_with_idle_gap() {
    let mut resource = SharedResource::new(DispatchPolicy::Fcfs);
    resource.submit(Job::new(1, 0, 2));
    resource.submit(Job::new(2, 0, 1));
    assert_eq!(resource.pending_len(), 1);

    assert_eq!(resource.tick(), None);
    assert_eq!(resource.tick(), None);
    assert_eq!(resource.tick().map(|j| j.id), Some(1));

    // The freed resource picks up job 2 only on the next tick
    assert!(!resource.is_busy());
    assert_eq!(resource.tick(), None);
    assert_eq!(resource.in_service().map(|j| j.id), Some(2));
    assert_eq!(resource.elapsed(), 0);

    assert_eq!(resource.tick(), None);
    assert_eq!(resource.elapsed(), 1);
    assert_eq!(resource.tick().map(|j| j.id), Some(2));
}

#[test]
fn test_priority_admits_smallest_key() {
    let mut resource = SharedResource::new(DispatchPolicy::Priority);
    resource.submit(Job::new(1, 0, 5));
    resource.submit(Job::new(2, 0, 4).with_priority_key(1));
    resource.submit(Job::new(3, 0, 1).with_priority_key(2));

    assert_eq!(tick_until_complete(&mut resource).id, 1);
    assert_eq!(resource.tick(), None);
    assert_eq!(resource.in_service().map(|j| j.id), Some(2));

    assert_eq!(tick_until_complete(&mut resource).id, 2);
    assert_eq!(resource.tick(), None);
    assert_eq!(resource.in_service().map(|j| j.id), Some(3));
}

#[test]
fn test_empty_pending_set_errors() {
    let mut set = PendingSet::new(DispatchPolicy::Fcfs);
    assert!(matches!(set.remove_next(), Err(ResourceError::Empty)));

    let mut set = PendingSet::new(DispatchPolicy::Priority);
    assert!(matches!(set.remove_next(), Err(ResourceError::Empty)));
}

#[test]
fn test_fcfs_preserves_submission_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut resource = SharedResource::new(DispatchPolicy::Fcfs);

    let mut submitted = Vec::new();
    for id in 0..40 {
        let job = Job::new(id, 0, rng.random_range(0..5))
            .with_priority_key(rng.random_range(0..3));
        submitted.push(job.id);
        resource.submit(job);
    }

    let completed: Vec<_> = (0..40).map(|_| tick_until_complete(&mut resource).id).collect();
    assert_eq!(completed, submitted);
}

#[test]
fn test_priority_orders_waiting_jobs_by_key_then_submission() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut resource = SharedResource::new(DispatchPolicy::Priority);

    // First job is admitted directly; the rest wait
    resource.submit(Job::new(0, 0, 2));
    let mut waiting = Vec::new();
    for id in 1..40u64 {
        let key = rng.random_range(0..4);
        waiting.push((key, id));
        resource.submit(Job::new(id, 0, rng.random_range(0..3)).with_priority_key(key));
    }
    waiting.sort();

    assert_eq!(tick_until_complete(&mut resource).id, 0);
    let completed: Vec<_> = (1..40).map(|_| tick_until_complete(&mut resource).id).collect();
    let expected: Vec<_> = waiting.into_iter().map(|(_, id)| id).collect();
    assert_eq!(completed, expected);
}

#[test]
fn test_at_most_one_job_in_service() {
    for policy in [DispatchPolicy::Fcfs, DispatchPolicy::Priority] {
        let mut rng = StdRng::seed_from_u64(99);
        let mut resource = SharedResource::new(policy);
        let mut in_service = 0i64;
        let mut next_id = 0;

        for _ in 0..2_000 {
            if rng.random_bool(0.4) {
                let service = rng.random_range(0..6);
                resource.submit(Job::new(next_id, 0, service));
                next_id += 1;
            }
            resource.tick();

            for event in resource.drain_events() {
                match event {
                    ResourceEvent::Admitted { .. } => in_service += 1,
                    ResourceEvent::Completed { .. } => in_service -= 1,
                    _ => {}
                }
                assert!((0..=1).contains(&in_service));
            }
            assert_eq!(in_service == 1, resource.is_busy());
            if let Some(job) = resource.in_service() {
                assert!(resource.elapsed() <= job.required_service);
            }
        }
    }
}

#[test]
fn test_idle_submission_has_zero_wait() {
    let mut resource = SharedResource::new(DispatchPolicy::Priority);
    resource.submit(Job::new(1, 0, 1));
    resource.submit(Job::new(2, 0, 1));
    assert_eq!(tick_until_complete(&mut resource).id, 1);
    resource.drain_events();

    resource.submit(Job::new(3, 0, 1).with_priority_key(50));
    assert_eq!(
        resource.drain_events(),
        vec![ResourceEvent::Admitted { job: 3, direct: true }]
    );
    assert_eq!(resource.pending().peek_next().unwrap().id, 2);
}

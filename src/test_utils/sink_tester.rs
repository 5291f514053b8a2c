use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{OnePass, SinkError, sink::Consumer, sink::Sink};

/// Test helper that returns parts needed for sink proptest.
///
/// # Notes
///
/// The parts should be fresh for every call: the same test is run
/// once per way of driving a sink.
pub trait SinkTester {
    type Item<'a>
    where
        Self: 'a;
    type Output<'a>
    where
        Self: 'a;

    #[allow(clippy::type_complexity)] // Can't satisfy it so I suppress it.
    fn sink_test_parts<'a>(
        &'a mut self,
    ) -> SinkTestParts<
        impl Iterator<Item = Self::Item<'a>>,
        impl Consumer<Self::Item<'a>, Output = Self::Output<'a>>,
        impl FnMut(
            Result<Self::Output<'a>, SinkError>,
            &mut dyn Iterator<Item = Self::Item<'a>>,
        ) -> Result<(), PredError>,
    >;
}

/// Test parts for sink testing.
pub struct SinkTestParts<I, C, P>
where
    I: Iterator,
    C: Consumer<I::Item>,
    P: FnMut(Result<C::Output, SinkError>, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    /// Iterator provided to feed the sink.
    pub iter: I,
    /// Consumer whose sink is tested.
    pub consumer: C,
    /// Whether the sink should have asked to stop before the iterator ran out.
    pub should_break: bool,
    /// Predicate on the following being satisfied:
    /// - Result of the sink.
    /// - Remaining of the iterator after the pass.
    pub pred: P,
}

/// An error returned when the output or the consumption of a sink is off.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect result produced by the sink.
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_way(self, way: &'static str) -> OfWay {
        OfWay {
            way,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfWay {
    way: &'static str,
    pred_error: PredError,
}

impl From<OfWay> for TestCaseError {
    fn from(OfWay { way, pred_error }: OfWay) -> Self {
        Self::Fail(format!("the sink misbehaves when {way}: {pred_error:?}").into())
    }
}

/// Used because we don't want the user to override any methods here.
pub trait SinkTesterExt: SinkTester {
    fn test_sink(&mut self) -> TestCaseResult {
        test_sink_part(self)
    }
}

impl<ST> SinkTesterExt for ST where ST: SinkTester {}

/// Basic implementation for [`SinkTester`] for most use case.
pub struct BasicSinkTester<ItFac, CnFac, SbPred, Pred, I, C>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    C: Consumer<I::Item>,
    ItFac: FnMut() -> I,
    CnFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(
        I,
        Result<C::Output, SinkError>,
        &mut dyn Iterator<Item = I::Item>,
    ) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub consumer_factory: CnFac,
    pub should_break_pred: SbPred,
    pub pred: Pred,
}

impl<ItFac, CnFac, SbPred, Pred, I, C> SinkTester
    for BasicSinkTester<ItFac, CnFac, SbPred, Pred, I, C>
where
    I: Iterator,
    C: Consumer<I::Item>,
    ItFac: FnMut() -> I,
    CnFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(
        I,
        Result<C::Output, SinkError>,
        &mut dyn Iterator<Item = I::Item>,
    ) -> Result<(), PredError>,
{
    type Item<'a>
        = I::Item
    where
        ItFac: 'a,
        CnFac: 'a,
        SbPred: 'a,
        Pred: 'a,
        I: 'a,
        C: 'a;
    type Output<'a>
        = C::Output
    where
        ItFac: 'a,
        CnFac: 'a,
        SbPred: 'a,
        Pred: 'a,
        I: 'a,
        C: 'a;

    fn sink_test_parts<'a>(
        &'a mut self,
    ) -> SinkTestParts<
        impl Iterator<Item = Self::Item<'a>>,
        impl Consumer<Self::Item<'a>, Output = Self::Output<'a>>,
        impl FnMut(
            Result<Self::Output<'a>, SinkError>,
            &mut dyn Iterator<Item = Self::Item<'a>>,
        ) -> Result<(), PredError>,
    > {
        SinkTestParts {
            iter: (self.iter_factory)(),
            consumer: (self.consumer_factory)(),
            should_break: (self.should_break_pred)((self.iter_factory)()),
            pred: |output, it| (self.pred)((self.iter_factory)(), output, it),
        }
    }
}

fn test_sink_part<ST>(tester: &mut ST) -> TestCaseResult
where
    ST: SinkTester + ?Sized,
{
    // Fed by hand, the way the driver does it.
    // Introduce scope so that `test_parts` is dropped,
    // or else we get the "mutable more than once" error.
    {
        let mut test_parts = tester.sink_test_parts();
        let mut sink = test_parts.consumer.into_sink();
        let mut first = true;

        let has_stopped = (|| {
            sink.break_hint()?;
            test_parts.iter.try_for_each(|item| {
                if first {
                    first = false;
                    sink.accept_first(&item)
                } else {
                    sink.accept_next(&item)
                }
            })
        })()
        .is_break();

        prop_assert_eq!(
            has_stopped,
            test_parts.should_break,
            "the sink didn't break correctly"
        );

        (test_parts.pred)(sink.finish(), &mut test_parts.iter)
            .map_err(|e| e.of_way("fed by hand"))?;
    }

    // `feed_into()`
    {
        let mut test_parts = tester.sink_test_parts();
        let output = test_parts.iter.by_ref().feed_into(test_parts.consumer);

        (test_parts.pred)(output, &mut test_parts.iter)
            .map_err(|e| e.of_way("run through `feed_into()`"))?;
    }

    // `request().finalize()`
    {
        let mut test_parts = tester.sink_test_parts();
        let output = test_parts
            .iter
            .by_ref()
            .request(test_parts.consumer)
            .finalize()
            .map(|(output,)| output)
            .map_err(|err| err.into_inner());

        (test_parts.pred)(output, &mut test_parts.iter)
            .map_err(|e| e.of_way("run through a request"))?;
    }

    Ok(())
}

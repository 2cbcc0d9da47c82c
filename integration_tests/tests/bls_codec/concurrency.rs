#[cfg(test)]
mod tests {
    use std::thread;

    use beacon_bls_core::{validate, PointKind, ValidationResult};
    use dashu::integer::UBig;

    use crate::fixtures::{init_logger, point_builder::PointBuilder, TestResult};

    const THREADS: usize = 8;

    fn corpus() -> TestResult<Vec<(PointKind, Vec<u8>)>> {
        Ok(vec![
            (PointKind::G1, PointBuilder::infinity(PointKind::G1).build()?),
            (PointKind::G1, PointBuilder::g1().compressed().x_modulus_plus(0).build()?),
            (PointKind::G1, PointBuilder::g1().compressed().x_modulus_plus(-1).build()?),
            (PointKind::G1, PointBuilder::g1().at_infinity().build()?),
            (PointKind::G2, PointBuilder::infinity(PointKind::G2).build()?),
            (PointKind::G2, PointBuilder::g2().compressed().flags2(0x80).build()?),
            (
                PointKind::G2,
                PointBuilder::infinity(PointKind::G2).x2(UBig::ONE).build()?,
            ),
            (PointKind::G2, vec![0u8; 48]),
        ])
    }

    #[test]
    fn test_parallel_validation_matches_sequential() -> TestResult<()> {
        init_logger();
        let inputs = corpus()?;
        let expected: Vec<ValidationResult> = inputs
            .iter()
            .map(|(kind, bytes)| validate(*kind, bytes))
            .collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        (0..100)
                            .flat_map(|_| inputs.iter())
                            .map(|(kind, bytes)| validate(*kind, bytes))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                let results = handle.join().unwrap();
                for chunk in results.chunks(inputs.len()) {
                    assert_eq!(chunk, expected.as_slice());
                }
            }
        });
        Ok(())
    }
}
